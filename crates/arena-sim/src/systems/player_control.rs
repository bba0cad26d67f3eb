//! Player movement: input → velocity → clamped position.

use glam::DVec2;

use arena_core::commands::InputState;
use arena_core::config::SimConfig;
use arena_core::enums::Facing;

use crate::player::Player;

/// Unit-or-zero movement direction for the held directions.
///
/// Opposite directions cancel; diagonals are scaled to unit length.
pub fn input_direction(input: &InputState) -> DVec2 {
    let axis = |neg: bool, pos: bool| f64::from(u8::from(pos)) - f64::from(u8::from(neg));
    let dir = DVec2::new(axis(input.left, input.right), axis(input.up, input.down));
    dir.normalize_or_zero()
}

/// Facing for the held directions, priority up > down > left > right.
pub fn facing_for(input: &InputState) -> Option<Facing> {
    if input.up {
        Some(Facing::Up)
    } else if input.down {
        Some(Facing::Down)
    } else if input.left {
        Some(Facing::Left)
    } else if input.right {
        Some(Facing::Right)
    } else {
        None
    }
}

/// Move the player and keep the hitbox inside the walls.
pub fn run(player: &mut Player, input: &InputState, config: &SimConfig, dt: f64) {
    if player.dead {
        return;
    }

    player.moving = input.any();
    if let Some(facing) = facing_for(input) {
        player.facing = facing;
    }

    let step = input_direction(input) * player.stats.speed * dt;
    player.position.x += step.x;
    player.position.y += step.y;
    clamp_to_walls(player, config);
}

/// Clamp so the hitbox stays within `[wall, size - wall]` on both axes.
pub fn clamp_to_walls(player: &mut Player, config: &SimConfig) {
    let wall = config.wall();
    let offset = Player::hitbox_offset();
    let hitbox = Player::hitbox_size();

    let min_x = wall - offset;
    let min_y = wall - offset;
    let max_x = (config.world_width - wall - hitbox - offset).max(min_x);
    let max_y = (config.world_height - wall - hitbox - offset).max(min_y);

    player.position.x = player.position.x.clamp(min_x, max_x);
    player.position.y = player.position.y.clamp(min_y, max_y);
}
