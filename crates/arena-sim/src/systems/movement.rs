//! Kinematic integration: position += velocity * dt.
//!
//! Only projectiles carry a `Velocity`; enemies are moved by `enemy_ai`
//! and the player by `player_control`.

use hecs::World;

use arena_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}
