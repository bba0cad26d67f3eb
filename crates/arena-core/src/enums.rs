//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy kind. Determines speed, size, score and whether it shoots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Melee chaser, damages on contact only.
    #[default]
    Basic,
    /// Chaser that also fires bolts at the player.
    Ranged,
}

/// Weapon that produced a projectile or a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Starting weapon, single shot gated by the player's fire rate.
    #[default]
    Pistol,
    /// Burst weapon.
    Smg,
    /// Spread weapon.
    Shotgun,
    /// Melee swing, no projectile travel.
    Knife,
    /// Enemy-owned bolt fired by ranged enemies.
    RangedBolt,
}

impl WeaponKind {
    /// Player weapons in the order they are evaluated each frame.
    pub const PLAYER_WEAPONS: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Smg,
        WeaponKind::Shotgun,
        WeaponKind::Knife,
    ];

    /// Inventory item id that unlocks this weapon. `None` for weapons
    /// that need no item (the pistol) or are not player weapons.
    pub fn item_id(self) -> Option<&'static str> {
        match self {
            WeaponKind::Smg => Some("SMG"),
            WeaponKind::Shotgun => Some("Shotgun"),
            WeaponKind::Knife => Some("knife"),
            WeaponKind::Pistol | WeaponKind::RangedBolt => None,
        }
    }
}

/// Side that fired a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    #[default]
    Player,
    Enemy,
}

/// Last non-zero movement direction of the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Item rarity, carried for the inventory collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Player stat targeted by an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    Speed,
    Damage,
    Life,
    FireRate,
}

/// Why an upgrade choice was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeReason {
    /// Kill count crossed a level threshold.
    LevelUp,
    /// A new round started.
    RoundAdvanced,
}

/// Cosmetic effect marker for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Knife swing arc.
    Slash,
    /// Enemy death burst.
    Explosion,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Frozen while the progression collaborator picks an upgrade.
    AwaitingUpgrade,
    /// Player died. Terminal until a new session starts.
    GameOver,
}

impl GamePhase {
    /// Phases in which continuous-time integration is suspended but state is kept.
    pub fn is_frozen(self) -> bool {
        matches!(self, GamePhase::Paused | GamePhase::AwaitingUpgrade)
    }
}
