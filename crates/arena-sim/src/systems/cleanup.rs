//! Cleanup system: despawns dead enemies and expired effect tokens.

use hecs::{Entity, World};

use arena_core::components::{EffectToken, EnemyInfo};

use crate::roster::EnemyRoster;

pub fn run(world: &mut World, roster: &mut EnemyRoster, now: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, info) in world.query_mut::<&EnemyInfo>() {
        if !info.alive {
            roster.forget(info.id);
            despawn_buffer.push(entity);
        }
    }

    for (entity, token) in world.query_mut::<&EffectToken>() {
        if token.expires_at_secs <= now {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
