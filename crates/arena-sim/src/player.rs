//! Player data model — stored in `SimulationEngine`, NOT as an ECS entity.
//!
//! The player is created once per session and never despawned; death is
//! the `dead` flag.

use arena_core::components::{Item, PlayerStats, Upgrade};
use arena_core::config::SimConfig;
use arena_core::constants::*;
use arena_core::enums::{Facing, UpgradeKind};
use arena_core::types::{Extent, Position};

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the visual footprint.
    pub position: Position,
    pub stats: PlayerStats,
    pub lives: u32,
    pub invincible_until_secs: f64,
    /// Acquisition order. Ids are unique.
    pub inventory: Vec<Item>,
    pub facing: Facing,
    pub moving: bool,
    pub dead: bool,
}

/// Result of a damage application that went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    pub lives_remaining: u32,
    pub died: bool,
}

impl Player {
    /// Player at the center of the world with the configured base stats.
    pub fn spawn(config: &SimConfig) -> Self {
        let x = ((config.world_width - PLAYER_SIZE) / 2.0).max(0.0);
        let y = ((config.world_height - PLAYER_SIZE) / 2.0).max(0.0);
        Self {
            position: Position::new(x, y),
            stats: config.player,
            lives: config.player.max_lives,
            invincible_until_secs: 0.0,
            inventory: Vec::new(),
            facing: Facing::default(),
            moving: false,
            dead: false,
        }
    }

    /// Side of the square hitbox.
    pub fn hitbox_size() -> f64 {
        PLAYER_SIZE * PLAYER_HITBOX_SCALE
    }

    /// Offset of the hitbox inside the visual footprint.
    pub fn hitbox_offset() -> f64 {
        (PLAYER_SIZE - Self::hitbox_size()) / 2.0
    }

    pub fn hitbox_origin(&self) -> Position {
        let offset = Self::hitbox_offset();
        Position::new(self.position.x + offset, self.position.y + offset)
    }

    pub fn hitbox_extent(&self) -> Extent {
        Extent::square(Self::hitbox_size())
    }

    /// Center of the hitbox, which is also the center of the footprint.
    pub fn center(&self) -> Position {
        self.position.box_center(PLAYER_SIZE)
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_invincible(&self, now: f64) -> bool {
        now < self.invincible_until_secs
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.inventory.iter().any(|item| item.id == id)
    }

    /// Append an item unless one with the same id is already held.
    pub fn grant_item(&mut self, item: Item) -> bool {
        if self.has_item(&item.id) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Remove `damage` lives unless dead or invincible.
    ///
    /// Lives saturate at zero; the hit that reaches zero reports `died` and
    /// every later call is a no-op.
    pub fn take_hit(&mut self, damage: u32, now: f64) -> Option<HitOutcome> {
        if self.dead || self.is_invincible(now) || damage == 0 {
            return None;
        }
        self.lives = self.lives.saturating_sub(damage);
        self.invincible_until_secs = now + PLAYER_INVINCIBILITY_SECS;
        if self.lives == 0 {
            self.dead = true;
            self.moving = false;
        }
        Some(HitOutcome {
            lives_remaining: self.lives,
            died: self.dead,
        })
    }

    /// Apply an upgrade descriptor. All kinds are additive.
    pub fn apply_upgrade(&mut self, upgrade: Upgrade) {
        let value = upgrade.value.max(0.0);
        match upgrade.kind {
            UpgradeKind::Speed => self.stats.speed += value,
            UpgradeKind::Damage => self.stats.damage += value,
            UpgradeKind::FireRate => self.stats.fire_rate += value,
            UpgradeKind::Life => {
                let extra = value.round() as u32;
                self.stats.max_lives = self.stats.max_lives.saturating_add(extra);
                self.lives = self.lives.saturating_add(extra);
            }
        }
    }

    /// Upgrade choices offered at a level-up, computed from current stats.
    pub fn upgrade_choices(&self) -> Vec<Upgrade> {
        // Shrinking the shot interval by a fraction f multiplies the rate by 1 / (1 - f).
        let faster_rate = self.stats.fire_rate / (1.0 - UPGRADE_SHOT_INTERVAL_REDUCTION);
        vec![
            Upgrade {
                kind: UpgradeKind::Speed,
                value: self.stats.speed * UPGRADE_SPEED_FRACTION,
            },
            Upgrade {
                kind: UpgradeKind::Damage,
                value: UPGRADE_DAMAGE_BONUS,
            },
            Upgrade {
                kind: UpgradeKind::FireRate,
                value: faster_rate - self.stats.fire_rate,
            },
            Upgrade {
                kind: UpgradeKind::Life,
                value: UPGRADE_LIFE_BONUS,
            },
        ]
    }
}
