//! Kind-specific behavioral profiles.
//!
//! Consolidates per-kind parameters for enemy spawning, steering and fire.

use arena_core::constants::*;
use arena_core::enums::EnemyKind;

/// Ranged fire parameters.
#[derive(Debug, Clone, Copy)]
pub struct RangedProfile {
    /// Seconds between bolts.
    pub fire_interval_secs: f64,
    pub bolt_speed: f64,
    pub bolt_range: f64,
}

/// Behavioral profile for an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyBehaviorProfile {
    /// Footprint side.
    pub size: f64,
    /// Movement speed (units/s).
    pub speed: f64,
    pub health: f64,
    /// Score credited on kill.
    pub score_value: u32,
    /// `None` for kinds that only deal contact damage.
    pub ranged: Option<RangedProfile>,
}

/// Get the behavioral profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyBehaviorProfile {
    match kind {
        EnemyKind::Basic => EnemyBehaviorProfile {
            size: BASIC_ENEMY_SIZE,
            speed: BASIC_ENEMY_SPEED,
            health: BASIC_ENEMY_HEALTH,
            score_value: BASIC_ENEMY_SCORE,
            ranged: None,
        },
        EnemyKind::Ranged => EnemyBehaviorProfile {
            size: RANGED_ENEMY_SIZE,
            speed: RANGED_ENEMY_SPEED,
            health: RANGED_ENEMY_HEALTH,
            score_value: RANGED_ENEMY_SCORE,
            ranged: Some(RangedProfile {
                fire_interval_secs: RANGED_FIRE_INTERVAL_SECS,
                bolt_speed: RANGED_BOLT_SPEED,
                bolt_range: RANGED_BOLT_RANGE,
            }),
        },
    }
}
