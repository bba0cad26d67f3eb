//! Game state snapshot: the complete read-only state handed to
//! rendering, scoring and UI collaborators after each frame.

use serde::{Deserialize, Serialize};

use crate::components::{Item, PlayerStats, Upgrade};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Extent, Position, SimClock, Velocity};

/// Complete state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimClock,
    pub phase: GamePhase,
    pub round: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    /// Upgrade choices waiting for a decision (empty unless AwaitingUpgrade).
    pub pending_upgrades: Vec<Upgrade>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner of the visual footprint.
    pub position: Position,
    pub size: f64,
    /// Collision hitbox (centered inside the footprint).
    pub hitbox_origin: Position,
    pub hitbox_size: Extent,
    pub facing: Facing,
    pub moving: bool,
    pub alive: bool,
    pub invincible: bool,
    pub lives: u32,
    pub stats: PlayerStats,
    pub inventory: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    /// Top-left corner of the footprint.
    pub position: Position,
    pub size: f64,
    /// True when last moving toward negative x (sprite flip).
    pub facing_left: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub owner: ProjectileOwner,
    pub weapon: WeaponKind,
    pub position: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Position,
    pub facing: Option<Facing>,
    pub expires_at_secs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub kills: u32,
    pub level: u32,
    pub round: u32,
}
