#[cfg(test)]
mod tests {
    use glam::DVec2;

    use arena_core::constants::*;
    use arena_core::enums::EnemyKind;

    use crate::profiles::get_profile;
    use crate::steering::{separation, separation_radius, steer, Neighbor, SteeringContext};
    use crate::targeting::{aim, nearest, rotate};

    fn ctx<'a>(center: DVec2, target: DVec2, neighbors: &'a [Neighbor]) -> SteeringContext<'a> {
        SteeringContext {
            id: 0,
            center,
            size: BASIC_ENEMY_SIZE,
            target,
            arrive_distance: 10.0,
            neighbors,
        }
    }

    // ---- Steering ----

    #[test]
    fn test_pure_seek_without_neighbors() {
        let dir = steer(&ctx(DVec2::ZERO, DVec2::new(300.0, 400.0), &[]));
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_when_at_target() {
        let dir = steer(&ctx(DVec2::ZERO, DVec2::new(5.0, 0.0), &[]));
        assert_eq!(dir, DVec2::ZERO, "Inside arrive distance the enemy holds");

        let dir = steer(&SteeringContext {
            arrive_distance: 0.0,
            ..ctx(DVec2::ZERO, DVec2::ZERO, &[])
        });
        assert_eq!(dir, DVec2::ZERO, "Degenerate zero distance gives zero");
    }

    #[test]
    fn test_self_is_ignored_for_separation() {
        let neighbors = [Neighbor {
            id: 0,
            center: DVec2::new(1.0, 0.0),
        }];
        let dir = steer(&ctx(DVec2::ZERO, DVec2::new(0.0, 500.0), &neighbors));
        assert!((dir - DVec2::new(0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_separation_pushes_away_and_output_is_unit() {
        // Neighbor directly to the right, target straight down.
        let neighbors = [Neighbor {
            id: 1,
            center: DVec2::new(30.0, 0.0),
        }];
        let dir = steer(&ctx(DVec2::ZERO, DVec2::new(0.0, 1000.0), &neighbors));
        assert!(dir.x < 0.0, "Should veer away from the neighbor, got {dir:?}");
        assert!(dir.y > 0.0, "Should still make progress toward the target");
        assert!((dir.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_separation_weight_and_average() {
        let radius = separation_radius(BASIC_ENEMY_SIZE);
        assert!((radius - 120.0).abs() < 1e-12, "64 * 1.6 < 120 floor");
        assert!((separation_radius(100.0) - 160.0).abs() < 1e-12);

        // One neighbor at half radius on the left: push = 0.5 to the right.
        let one = [Neighbor {
            id: 1,
            center: DVec2::new(-60.0, 0.0),
        }];
        let push = separation(0, DVec2::ZERO, BASIC_ENEMY_SIZE, &one);
        assert!((push - DVec2::new(0.5, 0.0)).length() < 1e-12);

        // Symmetric neighbors cancel out after averaging.
        let two = [
            Neighbor {
                id: 1,
                center: DVec2::new(-60.0, 0.0),
            },
            Neighbor {
                id: 2,
                center: DVec2::new(60.0, 0.0),
            },
        ];
        let push = separation(0, DVec2::ZERO, BASIC_ENEMY_SIZE, &two);
        assert!(push.length() < 1e-12);

        // Out of radius and coincident neighbors contribute nothing.
        let none = [
            Neighbor {
                id: 1,
                center: DVec2::new(500.0, 0.0),
            },
            Neighbor {
                id: 2,
                center: DVec2::ZERO,
            },
        ];
        assert_eq!(separation(0, DVec2::ZERO, BASIC_ENEMY_SIZE, &none), DVec2::ZERO);
    }

    #[test]
    fn test_stacked_enemies_spread_apart() {
        // Two enemies chasing the same far target from nearly the same spot.
        let target = DVec2::new(0.0, 2000.0);
        let mut a = DVec2::new(-5.0, 0.0);
        let mut b = DVec2::new(5.0, 0.0);
        for _ in 0..60 {
            let neighbors = [Neighbor { id: 1, center: a }, Neighbor { id: 2, center: b }];
            let da = steer(&SteeringContext {
                id: 1,
                center: a,
                size: BASIC_ENEMY_SIZE,
                target,
                arrive_distance: 10.0,
                neighbors: &neighbors,
            });
            let db = steer(&SteeringContext {
                id: 2,
                center: b,
                size: BASIC_ENEMY_SIZE,
                target,
                arrive_distance: 10.0,
                neighbors: &neighbors,
            });
            a += da * BASIC_ENEMY_SPEED / 60.0;
            b += db * BASIC_ENEMY_SPEED / 60.0;
        }
        assert!(a.distance(b) > 10.0, "Separation should widen the gap");
    }

    // ---- Targeting ----

    #[test]
    fn test_nearest_picks_closest_and_first_on_ties() {
        let candidates = [
            DVec2::new(10.0, 0.0),
            DVec2::new(0.0, 5.0),
            DVec2::new(-5.0, 0.0),
        ];
        assert_eq!(nearest(DVec2::ZERO, &candidates), Some(1));
        assert_eq!(nearest(DVec2::ZERO, &[]), None);
    }

    #[test]
    fn test_aim_and_rotate() {
        let dir = aim(DVec2::ZERO, DVec2::new(0.0, 10.0));
        assert!((dir - DVec2::new(0.0, 1.0)).length() < 1e-12);
        assert_eq!(aim(DVec2::ONE, DVec2::ONE), DVec2::ZERO);

        let turned = rotate(DVec2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!((turned - DVec2::new(0.0, 1.0)).length() < 1e-12);
        assert!((turned.length() - 1.0).abs() < 1e-12);
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles() {
        let basic = get_profile(EnemyKind::Basic);
        assert!(basic.ranged.is_none());
        assert_eq!(basic.score_value, BASIC_ENEMY_SCORE);

        let ranged = get_profile(EnemyKind::Ranged);
        let fire = ranged.ranged.expect("Ranged kind must shoot");
        assert!((fire.fire_interval_secs - 2.0).abs() < 1e-12);
        assert!(ranged.score_value > basic.score_value);
    }
}
