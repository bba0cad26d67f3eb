//! Nearest-target selection shared by every weapon.

use glam::DVec2;

/// Index of the candidate closest to `origin`.
///
/// Ties keep the earliest candidate in enumeration order. `None` when
/// there are no candidates.
pub fn nearest(origin: DVec2, candidates: &[DVec2]) -> Option<usize> {
    let mut best = None;
    let mut best_dist_sq = f64::INFINITY;
    for (i, c) in candidates.iter().enumerate() {
        let d = origin.distance_squared(*c);
        if d < best_dist_sq {
            best_dist_sq = d;
            best = Some(i);
        }
    }
    best
}

/// Unit aim direction from `origin` to `target`, zero if they coincide.
pub fn aim(origin: DVec2, target: DVec2) -> DVec2 {
    (target - origin).normalize_or_zero()
}

/// Rotate a direction by `radians` (counter-clockwise in math axes).
pub fn rotate(dir: DVec2, radians: f64) -> DVec2 {
    let angle = dir.y.atan2(dir.x) + radians;
    DVec2::new(angle.cos(), angle.sin()) * dir.length()
}
