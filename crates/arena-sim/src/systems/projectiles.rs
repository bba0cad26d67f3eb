//! Projectile retirement and hit detection.
//!
//! Runs after movement. A projectile is retired when it travels past its
//! range, leaves the world by more than the margin, outlives the lifetime
//! ceiling, or hits something. Each projectile hits at most one target.

use hecs::{Entity, World};
use tracing::trace;

use arena_core::collision::{inflate_rect, point_in_rect};
use arena_core::components::Projectile;
use arena_core::config::SimConfig;
use arena_core::constants::*;
use arena_core::enums::ProjectileOwner;
use arena_core::events::SimEvent;
use arena_core::types::{Extent, Position};

use crate::player::Player;
use crate::systems::contact::damage_player;
use crate::systems::kills::HitReport;
use crate::systems::query;

pub fn run(
    world: &mut World,
    player: &mut Player,
    config: &SimConfig,
    now: f64,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> Vec<HitReport> {
    despawn_buffer.clear();
    let mut hits = Vec::new();

    // Local health copies so later projectiles skip enemies already
    // killed earlier in this pass.
    let mut enemies = query::live_enemies(world);
    let (bolt_origin, bolt_extent) = inflate_rect(
        player.hitbox_origin(),
        player.hitbox_extent(),
        RANGED_BOLT_HALF_SIZE,
    );

    let mut projectiles: Vec<(Entity, Projectile, Position)> = world
        .query_mut::<(&mut Projectile, &Position)>()
        .into_iter()
        .map(|(entity, (projectile, pos))| {
            projectile.age_secs += dt;
            (entity, projectile.clone(), *pos)
        })
        .collect();
    projectiles.sort_by_key(|(_, p, _)| p.id);

    for (entity, projectile, pos) in projectiles {
        if should_retire(&projectile, pos, config) {
            trace!(id = projectile.id, "projectile retired");
            despawn_buffer.push(entity);
            continue;
        }

        match projectile.owner {
            ProjectileOwner::Player => {
                let target = enemies.iter_mut().find(|e| {
                    e.health > 0.0 && point_in_rect(pos, e.position, Extent::square(e.size))
                });
                if let Some(enemy) = target {
                    enemy.health -= projectile.damage;
                    hits.push(HitReport {
                        enemy_id: enemy.id,
                        damage: projectile.damage,
                        weapon: projectile.weapon,
                    });
                    despawn_buffer.push(entity);
                }
            }
            ProjectileOwner::Enemy => {
                if !player.dead && point_in_rect(pos, bolt_origin, bolt_extent) {
                    damage_player(player, projectile.damage.round() as u32, now, events);
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    hits
}

pub(crate) fn should_retire(projectile: &Projectile, pos: Position, config: &SimConfig) -> bool {
    let margin = PROJECTILE_WORLD_MARGIN;
    projectile.origin.distance_to(&pos) > projectile.max_range
        || pos.x < -margin
        || pos.y < -margin
        || pos.x > config.world_width + margin
        || pos.y > config.world_height + margin
        || projectile.age_secs > PROJECTILE_MAX_LIFETIME_SECS
}
