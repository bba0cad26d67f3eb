//! Chase steering with separation.
//!
//! Pure functions that compute a unit movement direction for one enemy
//! from the target point and the positions of the other live enemies.
//! Scaling by speed and integration happen in the caller.

use glam::DVec2;

use arena_core::constants::*;

/// Another enemy considered for separation.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub id: u32,
    pub center: DVec2,
}

/// Input to the steering function for a single enemy.
pub struct SteeringContext<'a> {
    pub id: u32,
    pub center: DVec2,
    /// Footprint side, drives the separation radius.
    pub size: f64,
    /// Point being chased (player hitbox center).
    pub target: DVec2,
    /// Distance at which the enemy is touching the target and stops.
    pub arrive_distance: f64,
    /// All live enemies. Entries with the same id as `id` are skipped.
    pub neighbors: &'a [Neighbor],
}

/// Separation radius for an enemy of the given size.
pub fn separation_radius(size: f64) -> f64 {
    (size * SEPARATION_RADIUS_FACTOR).max(SEPARATION_RADIUS_MIN)
}

/// Unit direction toward the target, or zero when already on it.
pub fn seek(center: DVec2, target: DVec2, arrive_distance: f64) -> DVec2 {
    let to_target = target - center;
    let distance = to_target.length();
    if distance <= arrive_distance.max(STEERING_EPSILON) {
        return DVec2::ZERO;
    }
    to_target / distance
}

/// Averaged repulsion from neighbors inside the separation radius.
/// Each contribution is weighted by `(radius - distance) / radius`.
/// Returns zero when nobody contributes.
pub fn separation(id: u32, center: DVec2, size: f64, neighbors: &[Neighbor]) -> DVec2 {
    let radius = separation_radius(size);
    let mut push = DVec2::ZERO;
    let mut count = 0u32;

    for other in neighbors {
        if other.id == id {
            continue;
        }
        let away = center - other.center;
        let distance = away.length();
        // Coincident centers give no direction to push in.
        if distance > STEERING_EPSILON && distance < radius {
            let weight = (radius - distance) / radius;
            push += away / distance * weight;
            count += 1;
        }
    }

    if count == 0 {
        DVec2::ZERO
    } else {
        push / count as f64
    }
}

/// Final movement direction: `normalize(seek + separation * blend)`.
///
/// Zero when the enemy has reached the target. Pure seek when no
/// neighbor is close enough to push.
pub fn steer(ctx: &SteeringContext<'_>) -> DVec2 {
    let seek_dir = seek(ctx.center, ctx.target, ctx.arrive_distance);
    if seek_dir == DVec2::ZERO {
        return DVec2::ZERO;
    }

    let push = separation(ctx.id, ctx.center, ctx.size, ctx.neighbors);
    if push == DVec2::ZERO {
        return seek_dir;
    }

    (seek_dir + push * SEPARATION_BLEND).normalize_or_zero()
}
