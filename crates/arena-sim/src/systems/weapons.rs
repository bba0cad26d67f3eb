//! Player weapon system: aim at the nearest live enemy and fire every
//! weapon whose gate and state machine allow it.
//!
//! Weapons only fire when at least one live enemy exists. Projectile
//! weapons spawn from the player's center; the knife resolves its hit
//! immediately and returns it to the caller.

use glam::DVec2;
use hecs::World;
use tracing::info;

use arena_ai::targeting;
use arena_core::collision::circle_overlap;
use arena_core::constants::*;
use arena_core::enums::{EffectKind, ProjectileOwner, WeaponKind};
use arena_core::events::SimEvent;
use arena_core::types::{Position, Velocity};

use crate::player::Player;
use crate::systems::kills::HitReport;
use crate::systems::query::{self, EnemySample};
use crate::weapons::{BurstParams, WeaponGate, WeaponLoadout};
use crate::world_setup::{self, ProjectileSpec};

pub fn run(
    world: &mut World,
    player: &Player,
    loadout: &mut WeaponLoadout,
    now: f64,
    next_projectile_id: &mut u32,
    events: &mut Vec<SimEvent>,
) -> Vec<HitReport> {
    let mut hits = Vec::new();
    if player.dead {
        return hits;
    }

    let mut armed = Vec::with_capacity(WeaponKind::PLAYER_WEAPONS.len());
    for weapon in WeaponKind::PLAYER_WEAPONS {
        match loadout.gate(weapon, player) {
            WeaponGate::Locked => {}
            WeaponGate::Unlocked { first_use } => {
                if first_use {
                    let item_id = weapon.item_id().unwrap_or_default().to_string();
                    info!(%item_id, ?weapon, "weapon unlocked");
                    events.push(SimEvent::ItemPickedUp { item_id, weapon });
                }
                armed.push(weapon);
            }
        }
    }

    let enemies = query::live_enemies(world);
    let origin = player.center();
    let centers: Vec<DVec2> = enemies.iter().map(|e| e.center).collect();
    let Some(nearest) = targeting::nearest(origin.to_vec(), &centers).map(|i| enemies[i]) else {
        return hits;
    };
    let aim = targeting::aim(origin.to_vec(), nearest.center);

    for weapon in armed {
        let mut shots: Vec<DVec2> = Vec::new();
        let range = match weapon {
            WeaponKind::Pistol => {
                let interval = 1.0 / player.stats.fire_rate.max(f64::EPSILON);
                if loadout.pistol.try_fire(now, interval) {
                    shots.push(aim);
                }
                PISTOL_RANGE
            }
            WeaponKind::Smg => {
                if loadout.smg.poll(now, BurstParams::SMG) {
                    shots.push(aim);
                }
                SMG_RANGE
            }
            WeaponKind::Shotgun => {
                if loadout.shotgun.try_fire(now, SHOTGUN_COOLDOWN_SECS) {
                    shots.extend(
                        SHOTGUN_SPREAD_DEG
                            .iter()
                            .map(|deg| targeting::rotate(aim, deg.to_radians())),
                    );
                }
                SHOTGUN_RANGE
            }
            WeaponKind::Knife => {
                if let Some(hit) = swing_knife(world, player, loadout, &nearest, now) {
                    hits.push(hit);
                }
                continue;
            }
            WeaponKind::RangedBolt => continue,
        };

        for dir in shots {
            world_setup::spawn_projectile(
                world,
                next_projectile_id,
                ProjectileSpec {
                    owner: ProjectileOwner::Player,
                    weapon,
                    origin,
                    velocity: Velocity::from(dir * PLAYER_PROJECTILE_SPEED),
                    max_range: range,
                    damage: player.stats.damage,
                },
            );
        }
    }
    hits
}

/// Melee swing against the nearest enemy if it is within slash range.
fn swing_knife(
    world: &mut World,
    player: &Player,
    loadout: &mut WeaponLoadout,
    nearest: &EnemySample,
    now: f64,
) -> Option<HitReport> {
    let origin = player.center();
    if !circle_overlap(origin, KNIFE_SLASH_RANGE, Position::from(nearest.center), 0.0) {
        return None;
    }
    if !loadout.knife.try_fire(now, 1.0 / KNIFE_FIRE_RATE) {
        return None;
    }
    world_setup::spawn_effect(
        world,
        EffectKind::Slash,
        origin,
        Some(player.facing),
        now + SLASH_EFFECT_SECS,
    );
    Some(HitReport {
        enemy_id: nearest.id,
        damage: player.stats.damage,
        weapon: WeaponKind::Knife,
    })
}
