//! Hit resolution and the single kill path.
//!
//! Every enemy death goes through [`kill`], which is idempotent per id:
//! once an id is recorded dead, further reports are ignored.

use hecs::World;
use tracing::debug;

use arena_core::components::{EnemyInfo, Health};
use arena_core::constants::EXPLOSION_EFFECT_SECS;
use arena_core::enums::{EffectKind, WeaponKind};
use arena_core::events::SimEvent;
use arena_core::types::Position;

use crate::roster::{EnemyRoster, ScoreState};
use crate::world_setup;

/// Damage dealt to one enemy by one projectile or swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReport {
    pub enemy_id: u32,
    pub damage: f64,
    pub weapon: WeaponKind,
}

pub fn apply_hits(
    world: &mut World,
    roster: &mut EnemyRoster,
    hits: &[HitReport],
    score: &mut ScoreState,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    for hit in hits {
        apply_hit(world, roster, *hit, score, now, events);
    }
}

/// Subtract damage and kill the enemy if its health is gone.
/// Returns true if this hit killed it.
pub fn apply_hit(
    world: &mut World,
    roster: &mut EnemyRoster,
    hit: HitReport,
    score: &mut ScoreState,
    now: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    if roster.is_dead(hit.enemy_id) {
        return false;
    }
    let Some(entity) = roster.lookup(hit.enemy_id) else {
        return false;
    };
    {
        let Ok(mut health) = world.get::<&mut Health>(entity) else {
            return false;
        };
        health.current -= hit.damage;
        if health.current > 0.0 {
            return false;
        }
    }
    kill(world, roster, hit.enemy_id, hit.weapon, score, now, events)
}

/// Kill an enemy by id. Unknown or already-dead ids are a no-op.
pub fn kill(
    world: &mut World,
    roster: &mut EnemyRoster,
    enemy_id: u32,
    weapon: WeaponKind,
    score: &mut ScoreState,
    now: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    if roster.is_dead(enemy_id) {
        return false;
    }
    let Some(entity) = roster.lookup(enemy_id) else {
        return false;
    };

    let (kind, score_value, center) = {
        let Ok(mut info) = world.get::<&mut EnemyInfo>(entity) else {
            return false;
        };
        if !info.alive {
            return false;
        }
        info.alive = false;
        let center = world
            .get::<&Position>(entity)
            .map(|pos| pos.box_center(info.size))
            .unwrap_or_default();
        (info.kind, info.score_value, center)
    };
    roster.mark_dead(enemy_id);

    score.kills += 1;
    score.score += score_value;
    debug!(enemy = enemy_id, ?kind, ?weapon, score = score.score, "enemy killed");

    events.push(SimEvent::EnemyKilled {
        enemy_id,
        kind,
        score_value,
        weapon,
    });
    events.push(SimEvent::ScoreChanged {
        delta: score_value,
        total: score.score,
    });

    world_setup::spawn_effect(
        world,
        EffectKind::Explosion,
        center,
        None,
        now + EXPLOSION_EFFECT_SECS,
    );
    true
}
