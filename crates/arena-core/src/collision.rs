//! Overlap tests shared by every subsystem.
//!
//! Pure functions, no side effects.

use crate::types::{Extent, Position};

/// True iff the distance between the centers is at most the sum of the radii.
pub fn circle_overlap(center_a: Position, radius_a: f64, center_b: Position, radius_b: f64) -> bool {
    let dx = center_b.x - center_a.x;
    let dy = center_b.y - center_a.y;
    let reach = radius_a + radius_b;
    dx * dx + dy * dy <= reach * reach
}

/// True iff `point` lies in `[origin, origin + size]` on both axes (inclusive).
pub fn point_in_rect(point: Position, origin: Position, size: Extent) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.w
        && point.y >= origin.y
        && point.y <= origin.y + size.h
}

/// Grow a rectangle by `margin` on every side.
pub fn inflate_rect(origin: Position, size: Extent, margin: f64) -> (Position, Extent) {
    (
        Position::new(origin.x - margin, origin.y - margin),
        Extent::new(size.w + 2.0 * margin, size.h + 2.0 * margin),
    )
}
