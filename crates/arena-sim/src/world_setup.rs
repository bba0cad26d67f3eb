//! Entity spawn factories for the arena world.

use hecs::{Entity, World};
use tracing::debug;

use arena_ai::profiles::get_profile;
use arena_core::components::*;
use arena_core::enums::*;
use arena_core::types::{Position, Velocity};

use crate::roster::EnemyRoster;

/// Spawn an enemy of `kind` with its top-left corner at `position`.
///
/// Ranged enemies get their first shot one fire interval after spawning.
pub fn spawn_enemy(
    world: &mut World,
    roster: &mut EnemyRoster,
    kind: EnemyKind,
    position: Position,
    now: f64,
) -> u32 {
    let profile = get_profile(kind);
    let id = roster.allocate_id();
    let info = EnemyInfo {
        id,
        kind,
        size: profile.size,
        speed: profile.speed,
        score_value: profile.score_value,
        alive: true,
    };
    let entity = world.spawn((
        Enemy,
        info,
        position,
        Health {
            current: profile.health,
        },
        Heading::default(),
        ContactDebounce::default(),
    ));
    if let Some(ranged) = profile.ranged {
        let _ = world.insert_one(
            entity,
            RangedAttack {
                next_fire_secs: now + ranged.fire_interval_secs,
            },
        );
    }
    roster.register(id, entity);
    debug!(id, ?kind, x = position.x, y = position.y, "enemy spawned");
    id
}

/// Parameters of a projectile about to be spawned.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpec {
    pub owner: ProjectileOwner,
    pub weapon: WeaponKind,
    pub origin: Position,
    pub velocity: Velocity,
    pub max_range: f64,
    pub damage: f64,
}

pub fn spawn_projectile(world: &mut World, next_id: &mut u32, spec: ProjectileSpec) -> Entity {
    let id = *next_id;
    *next_id = next_id.wrapping_add(1);
    world.spawn((
        Projectile {
            id,
            owner: spec.owner,
            weapon: spec.weapon,
            origin: spec.origin,
            max_range: spec.max_range,
            damage: spec.damage,
            age_secs: 0.0,
        },
        spec.origin,
        spec.velocity,
    ))
}

pub fn spawn_effect(
    world: &mut World,
    kind: EffectKind,
    position: Position,
    facing: Option<Facing>,
    expires_at_secs: f64,
) -> Entity {
    world.spawn((
        position,
        EffectToken {
            kind,
            facing,
            expires_at_secs,
        },
    ))
}
