#[cfg(test)]
mod tests {
    use crate::collision::{circle_overlap, inflate_rect, point_in_rect};
    use crate::commands::{InputState, PlayerCommand};
    use crate::components::{Item, Upgrade};
    use crate::config::{ConfigError, SimConfig};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Extent, Position, SimClock};

    // ---- Collision primitives ----

    #[test]
    fn test_circle_overlap_touching_counts() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        assert!(circle_overlap(a, 4.0, b, 6.0), "Touching circles overlap");
        assert!(!circle_overlap(a, 4.0, b, 5.9));
        assert!(circle_overlap(a, 0.0, a, 0.0), "Coincident points overlap");
    }

    #[test]
    fn test_point_in_rect_inclusive_edges() {
        let origin = Position::new(10.0, 20.0);
        let size = Extent::new(5.0, 8.0);
        assert!(point_in_rect(Position::new(10.0, 20.0), origin, size));
        assert!(point_in_rect(Position::new(15.0, 28.0), origin, size));
        assert!(point_in_rect(Position::new(12.5, 24.0), origin, size));
        assert!(!point_in_rect(Position::new(15.01, 24.0), origin, size));
        assert!(!point_in_rect(Position::new(12.0, 19.99), origin, size));
    }

    #[test]
    fn test_inflate_rect_grows_every_side() {
        let (origin, size) = inflate_rect(Position::new(0.0, 0.0), Extent::square(10.0), 2.0);
        assert_eq!(origin, Position::new(-2.0, -2.0));
        assert_eq!(size, Extent::new(14.0, 14.0));
    }

    // ---- Types ----

    #[test]
    fn test_clock_advance() {
        let mut clock = SimClock::default();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.frame, 2);
        assert!((clock.now() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_box_center_and_distance() {
        let p = Position::new(10.0, 10.0);
        let c = p.box_center(64.0);
        assert_eq!(c, Position::new(42.0, 42.0));
        assert!((Position::new(0.0, 0.0).distance_to(&Position::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_weapon_item_ids() {
        assert_eq!(WeaponKind::Pistol.item_id(), None);
        assert_eq!(WeaponKind::Smg.item_id(), Some("SMG"));
        assert_eq!(WeaponKind::Shotgun.item_id(), Some("Shotgun"));
        assert_eq!(WeaponKind::Knife.item_id(), Some("knife"));
        assert_eq!(WeaponKind::RangedBolt.item_id(), None);
    }

    #[test]
    fn test_frozen_phases() {
        assert!(GamePhase::Paused.is_frozen());
        assert!(GamePhase::AwaitingUpgrade.is_frozen());
        assert!(!GamePhase::Active.is_frozen());
        assert!(!GamePhase::GameOver.is_frozen());
    }

    // ---- Serde ----

    /// Commands are internally tagged so collaborators can send plain JSON.
    #[test]
    fn test_player_command_tagged_json() {
        let json = r#"{"type":"SetInput","input":{"up":true,"down":false,"left":true,"right":false}}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        match cmd {
            PlayerCommand::SetInput { input } => {
                assert_eq!(
                    input,
                    InputState {
                        up: true,
                        down: false,
                        left: true,
                        right: false
                    }
                );
            }
            other => panic!("Expected SetInput, got {other:?}"),
        }

        let upgrade = PlayerCommand::ApplyUpgrade {
            upgrade: Upgrade {
                kind: UpgradeKind::Damage,
                value: 5.0,
            },
        };
        let json = serde_json::to_string(&upgrade).unwrap();
        assert!(json.contains(r#""type":"ApplyUpgrade""#));

        let grant = PlayerCommand::GrantItem {
            item: Item::new("SMG", Rarity::Rare),
        };
        let back: PlayerCommand =
            serde_json::from_str(&serde_json::to_string(&grant).unwrap()).unwrap();
        assert!(matches!(back, PlayerCommand::GrantItem { item } if item.id == "SMG"));
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::EnemyKilled {
                enemy_id: 7,
                kind: EnemyKind::Ranged,
                score_value: 25,
                weapon: WeaponKind::Shotgun,
            },
            SimEvent::PlayerDied {
                final_score: 120,
                round: 4,
            },
            SimEvent::UpgradeOffered {
                reason: UpgradeReason::LevelUp,
                choices: vec![Upgrade {
                    kind: UpgradeKind::Life,
                    value: 1.0,
                }],
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.enemies.is_empty());
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn.base_count, 5);
        assert!((config.spawn.growth_factor - 1.5).abs() < 1e-12);
        assert_eq!(config.wall(), 40.0);
    }

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let config = SimConfig::from_json_str(
            r#"{"seed": 7, "wall_thickness": null, "spawn": {"ranger_cap": 2}}"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.wall(), 0.0);
        assert_eq!(config.spawn.ranger_cap, 2);
        assert_eq!(config.spawn.base_count, 5);
        assert_eq!(config.player.max_lives, 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SimConfig::from_json_str(r#"{"world_width": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");

        let err = SimConfig::from_json_str(r#"{"world_width": 100.0, "world_height": 100.0}"#)
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid(_)),
            "World smaller than the hitbox plus walls must be rejected"
        );

        let err = SimConfig::from_json_str(r#"{"kills_per_level": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here/arena.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
