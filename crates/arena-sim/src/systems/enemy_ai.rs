//! Enemy steering system: chase the player while separating from
//! neighbours.
//!
//! Every enemy steers from the positions at the start of the step, then
//! all moves are applied, so iteration order does not affect the result.

use glam::DVec2;
use hecs::World;

use arena_ai::steering::{self, Neighbor, SteeringContext};
use arena_core::components::Heading;
use arena_core::types::Position;

use crate::player::Player;
use crate::systems::query;

pub fn run(world: &mut World, player: &Player, dt: f64) {
    let enemies = query::live_enemies(world);
    if enemies.is_empty() {
        return;
    }

    let neighbors: Vec<Neighbor> = enemies
        .iter()
        .map(|e| Neighbor {
            id: e.id,
            center: e.center,
        })
        .collect();
    let target = player.center().to_vec();
    let hitbox = Player::hitbox_size();

    let moves: Vec<_> = enemies
        .iter()
        .map(|e| {
            let dir = steering::steer(&SteeringContext {
                id: e.id,
                center: e.center,
                size: e.size,
                target,
                arrive_distance: (hitbox + e.size) / 2.0,
                neighbors: &neighbors,
            });
            (e.entity, dir, e.speed)
        })
        .collect();

    for (entity, dir, speed) in moves {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.x += dir.x * speed * dt;
            pos.y += dir.y * speed * dt;
        }
        // Arrived enemies keep their last heading.
        if dir == DVec2::ZERO {
            continue;
        }
        if let Ok(mut heading) = world.get::<&mut Heading>(entity) {
            heading.x = dir.x;
            heading.y = dir.y;
        }
    }
}
