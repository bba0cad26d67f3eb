//! Session configuration.
//!
//! Every field has a default so a config file only needs to name what it
//! overrides. Loaded from JSON and checked with [`SimConfig::validate`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::PlayerStats;
use crate::constants::*;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub world_width: f64,
    pub world_height: f64,
    /// Boundary wall thickness. `None` means the world has no walls.
    pub wall_thickness: Option<f64>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Frame deltas are clamped to this many seconds.
    pub max_frame_dt: f64,
    /// Grace delay between clearing a round and spawning the next.
    pub round_advance_delay_secs: f64,
    /// Kills needed per level-up offer.
    pub kills_per_level: u32,
    /// Offer an upgrade on every round advance as well as on level-ups.
    pub upgrade_on_round_advance: bool,
    /// Player base stats at session start.
    pub player: PlayerStats,
    pub spawn: SpawnConfig,
}

/// Round population and placement tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Basic enemies in round 1.
    pub base_count: u32,
    /// Per-round multiplier applied to `base_count`.
    pub growth_factor: f64,
    /// First round with ranged enemies.
    pub ranger_start_round: u32,
    /// Maximum ranged enemies per round.
    pub ranger_cap: u32,
    /// Placement attempts allowed per enemy before constraints are relaxed.
    pub attempts_per_enemy: u32,
    /// Minimum spacing as a multiple of enemy size.
    pub spacing_factor: f64,
    /// Reject candidates inside the player's viewport.
    pub avoid_viewport: bool,
    /// Margin added around the viewport when `avoid_viewport` is set.
    pub viewport_margin: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            wall_thickness: Some(WALL_THICKNESS),
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            max_frame_dt: MAX_FRAME_DT,
            round_advance_delay_secs: ROUND_ADVANCE_DELAY_SECS,
            kills_per_level: KILLS_PER_LEVEL,
            upgrade_on_round_advance: true,
            player: PlayerStats::default(),
            spawn: SpawnConfig::default(),
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            base_count: SPAWN_BASE_COUNT,
            growth_factor: SPAWN_GROWTH_FACTOR,
            ranger_start_round: RANGER_START_ROUND,
            ranger_cap: RANGER_CAP,
            attempts_per_enemy: SPAWN_ATTEMPTS_PER_ENEMY,
            spacing_factor: SPAWN_SPACING_FACTOR,
            avoid_viewport: true,
            viewport_margin: VIEWPORT_SPAWN_MARGIN,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Wall thickness, zero when the world has no walls.
    pub fn wall(&self) -> f64 {
        self.wall_thickness.unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        let wall = self.wall();
        if wall < 0.0 {
            return invalid(format!("wall thickness must not be negative, got {wall}"));
        }
        let hitbox = PLAYER_SIZE * PLAYER_HITBOX_SCALE;
        let inner_w = self.world_width - 2.0 * wall;
        let inner_h = self.world_height - 2.0 * wall;
        if inner_w < hitbox || inner_h < hitbox {
            return invalid(format!(
                "world interior {inner_w}x{inner_h} cannot hold the player hitbox ({hitbox})"
            ));
        }
        if !(self.max_frame_dt > 0.0) {
            return invalid(format!("max_frame_dt must be positive, got {}", self.max_frame_dt));
        }
        if self.round_advance_delay_secs < 0.0 {
            return invalid("round_advance_delay_secs must not be negative".into());
        }
        if self.kills_per_level == 0 {
            return invalid("kills_per_level must be at least 1".into());
        }
        if !(self.player.speed > 0.0 && self.player.fire_rate > 0.0) {
            return invalid("player speed and fire rate must be positive".into());
        }
        if self.player.max_lives == 0 {
            return invalid("player max_lives must be at least 1".into());
        }
        if self.spawn.base_count == 0 || !(self.spawn.growth_factor > 0.0) {
            return invalid("spawn base_count and growth_factor must be positive".into());
        }
        if self.spawn.spacing_factor < 0.0 || self.spawn.viewport_margin < 0.0 {
            return invalid("spawn spacing and viewport margin must not be negative".into());
        }
        Ok(())
    }
}
