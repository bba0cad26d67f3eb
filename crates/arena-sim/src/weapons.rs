//! Per-weapon firing state machines.
//!
//! Each player weapon owns a small state machine that decides, given the
//! current simulation time, whether it fires this frame. Aiming and
//! projectile spawning live in `systems::weapons`.

use arena_core::constants::*;
use arena_core::enums::WeaponKind;

use crate::player::Player;

/// Fixed-interval gate used by the pistol and the knife.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cadence {
    /// `None` until the first shot, so a fresh weapon is ready at once.
    last_shot_secs: Option<f64>,
}

impl Cadence {
    pub fn ready(&self, now: f64, interval: f64) -> bool {
        match self.last_shot_secs {
            None => true,
            Some(last) => now - last >= interval,
        }
    }

    pub fn mark(&mut self, now: f64) {
        self.last_shot_secs = Some(now);
    }

    /// Fire if ready, recording the shot.
    pub fn try_fire(&mut self, now: f64, interval: f64) -> bool {
        if !self.ready(now, interval) {
            return false;
        }
        self.mark(now);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParams {
    pub count: u32,
    pub delay_secs: f64,
    pub cooldown_secs: f64,
}

impl BurstParams {
    pub const SMG: BurstParams = BurstParams {
        count: SMG_BURST_COUNT,
        delay_secs: SMG_BURST_DELAY_SECS,
        cooldown_secs: SMG_COOLDOWN_SECS,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BurstPhase {
    #[default]
    Idle,
    Bursting {
        shots_remaining: u32,
        next_shot_secs: f64,
    },
    Cooldown {
        until_secs: f64,
    },
}

/// Burst-fire state machine: Idle → Bursting → Cooldown → Idle.
///
/// At most one shot per poll. Shots within a burst are `delay_secs`
/// apart; the cooldown starts at the last shot of the burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurstState {
    pub phase: BurstPhase,
}

impl BurstState {
    pub fn poll(&mut self, now: f64, params: BurstParams) -> bool {
        if let BurstPhase::Cooldown { until_secs } = self.phase {
            if now > until_secs {
                self.phase = BurstPhase::Idle;
            } else {
                return false;
            }
        }

        if self.phase == BurstPhase::Idle {
            self.phase = BurstPhase::Bursting {
                shots_remaining: params.count.max(1),
                next_shot_secs: now,
            };
        }

        let BurstPhase::Bursting {
            shots_remaining,
            next_shot_secs,
        } = self.phase
        else {
            return false;
        };
        if now < next_shot_secs {
            return false;
        }

        let remaining = shots_remaining.saturating_sub(1);
        self.phase = if remaining == 0 {
            BurstPhase::Cooldown {
                until_secs: now + params.cooldown_secs,
            }
        } else {
            BurstPhase::Bursting {
                shots_remaining: remaining,
                next_shot_secs: now + params.delay_secs,
            }
        };
        true
    }
}

/// Spread weapon gate: one volley, then a cooldown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadState {
    cooldown_until_secs: f64,
}

impl SpreadState {
    pub fn try_fire(&mut self, now: f64, cooldown: f64) -> bool {
        if now < self.cooldown_until_secs {
            return false;
        }
        self.cooldown_until_secs = now + cooldown;
        true
    }
}

/// Whether a player may use a weapon right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponGate {
    Locked,
    /// `first_use` is true exactly once per weapon per session.
    Unlocked { first_use: bool },
}

/// All weapon state the player carries across frames.
#[derive(Debug, Clone, Default)]
pub struct WeaponLoadout {
    pub pistol: Cadence,
    pub smg: BurstState,
    pub shotgun: SpreadState,
    pub knife: Cadence,
    announced: Vec<WeaponKind>,
}

impl WeaponLoadout {
    /// Check the inventory gate for `weapon`. The first unlocked check of a
    /// gated weapon reports `first_use`, used to announce the pickup once.
    pub fn gate(&mut self, weapon: WeaponKind, player: &Player) -> WeaponGate {
        let Some(item_id) = weapon.item_id() else {
            return WeaponGate::Unlocked { first_use: false };
        };
        if !player.has_item(item_id) {
            return WeaponGate::Locked;
        }
        let first_use = !self.announced.contains(&weapon);
        if first_use {
            self.announced.push(weapon);
        }
        WeaponGate::Unlocked { first_use }
    }
}
