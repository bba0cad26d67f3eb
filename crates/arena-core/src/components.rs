//! ECS components for hecs entities, plus the plain-data records the
//! engine keeps outside the world (player stats, items, upgrades).
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Position;

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Identity and per-kind parameters of an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyInfo {
    /// Session-unique id. Never reused.
    pub id: u32,
    pub kind: EnemyKind,
    /// Side of the square footprint. Position is its top-left corner.
    pub size: f64,
    pub speed: f64,
    pub score_value: u32,
    /// Cleared by the kill path; the cleanup system despawns dead enemies.
    pub alive: bool,
}

/// Remaining hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
}

/// Unit direction of the last steering step (zero when holding position).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub x: f64,
    pub y: f64,
}

/// Per-enemy contact-damage debounce.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContactDebounce {
    /// Simulation time of the last contact hit this enemy dealt.
    pub last_hit_secs: Option<f64>,
}

/// Fire schedule of an enemy that shoots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangedAttack {
    pub next_fire_secs: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: ProjectileOwner,
    pub weapon: WeaponKind,
    /// Spawn point, used for the range check.
    pub origin: Position,
    pub max_range: f64,
    /// Damage dealt on hit (health points for enemies, lives for the player).
    pub damage: f64,
    /// Seconds since spawn.
    pub age_secs: f64,
}

/// Short-lived cosmetic marker for the rendering collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectToken {
    pub kind: EffectKind,
    pub facing: Option<Facing>,
    pub expires_at_secs: f64,
}

/// Player stats. Base values come from config; upgrades add to them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub speed: f64,
    pub damage: f64,
    /// Pistol shots per second.
    pub fire_rate: f64,
    pub max_lives: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            speed: PLAYER_BASE_SPEED,
            damage: PLAYER_BASE_DAMAGE,
            fire_rate: PLAYER_BASE_FIRE_RATE,
            max_lives: PLAYER_BASE_LIVES,
        }
    }
}

/// Inventory entry. Acquisition is external; the core only reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub rarity: Rarity,
}

impl Item {
    pub fn new(id: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            rarity,
        }
    }
}

/// Upgrade descriptor exchanged with the progression collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    pub value: f64,
}
