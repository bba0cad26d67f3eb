//! Simulation constants and tuning parameters.
//!
//! World-shape and spawner knobs that a session may want to change live in
//! `config::SimConfig`; everything here is fixed behavior.

// --- Frame ---

/// Largest frame delta integrated in one step (seconds).
pub const MAX_FRAME_DT: f64 = 0.25;

/// Target frame rate of the real-time driver (Hz).
pub const TARGET_FRAME_RATE: u32 = 60;

// --- World ---

pub const WORLD_WIDTH: f64 = 3000.0;
pub const WORLD_HEIGHT: f64 = 3000.0;

/// Thickness of the boundary walls.
pub const WALL_THICKNESS: f64 = 40.0;

pub const VIEWPORT_WIDTH: f64 = 1280.0;
pub const VIEWPORT_HEIGHT: f64 = 720.0;

/// Extra margin around the viewport in which enemies are not spawned.
pub const VIEWPORT_SPAWN_MARGIN: f64 = 100.0;

// --- Player ---

/// Side of the player's visual footprint.
pub const PLAYER_SIZE: f64 = 200.0;

/// Hitbox side as a fraction of the visual footprint (centered).
pub const PLAYER_HITBOX_SCALE: f64 = 0.6;

pub const PLAYER_BASE_SPEED: f64 = 280.0;

/// Pistol shots per second.
pub const PLAYER_BASE_FIRE_RATE: f64 = 1.0;

pub const PLAYER_BASE_DAMAGE: f64 = 10.0;

pub const PLAYER_BASE_LIVES: u32 = 3;

/// Invincibility window after taking a hit (seconds).
pub const PLAYER_INVINCIBILITY_SECS: f64 = 1.0;

// --- Enemies ---

pub const BASIC_ENEMY_SIZE: f64 = 64.0;
pub const BASIC_ENEMY_SPEED: f64 = 120.0;
pub const BASIC_ENEMY_HEALTH: f64 = 10.0;
pub const BASIC_ENEMY_SCORE: u32 = 10;

pub const RANGED_ENEMY_SIZE: f64 = 48.0;
pub const RANGED_ENEMY_SPEED: f64 = 100.0;
pub const RANGED_ENEMY_HEALTH: f64 = 10.0;
pub const RANGED_ENEMY_SCORE: u32 = 25;

/// Seconds between bolts fired by a ranged enemy.
pub const RANGED_FIRE_INTERVAL_SECS: f64 = 2.0;
pub const RANGED_BOLT_SPEED: f64 = 250.0;
pub const RANGED_BOLT_RANGE: f64 = 900.0;

/// Half-size of an enemy bolt, added around the player hitbox for hit tests.
pub const RANGED_BOLT_HALF_SIZE: f64 = 6.0;

/// Lives removed by one contact or bolt hit.
pub const CONTACT_DAMAGE: u32 = 1;

/// Minimum time between contact-damage events from the same enemy (seconds).
pub const CONTACT_DEBOUNCE_SECS: f64 = 0.5;

// --- Steering ---

/// Separation radius floor; the effective radius is max(size * factor, floor).
pub const SEPARATION_RADIUS_MIN: f64 = 120.0;
pub const SEPARATION_RADIUS_FACTOR: f64 = 1.6;

/// Weight of the averaged separation vector against the unit seek vector.
pub const SEPARATION_BLEND: f64 = 0.9;

/// Distances below this are treated as zero.
pub const STEERING_EPSILON: f64 = 1e-6;

// --- Player weapons ---

pub const PLAYER_PROJECTILE_SPEED: f64 = 700.0;

pub const PISTOL_RANGE: f64 = 300.0;

pub const SMG_RANGE: f64 = 350.0;
pub const SMG_BURST_COUNT: u32 = 3;
pub const SMG_BURST_DELAY_SECS: f64 = 0.1;
pub const SMG_COOLDOWN_SECS: f64 = 1.5;

pub const SHOTGUN_RANGE: f64 = 150.0;
pub const SHOTGUN_COOLDOWN_SECS: f64 = 2.5;

/// Angular offsets of the shotgun pellets around the aim direction (degrees).
pub const SHOTGUN_SPREAD_DEG: [f64; 5] = [-20.0, -10.0, 0.0, 10.0, 20.0];

pub const KNIFE_SLASH_RANGE: f64 = 100.0;

/// Knife swings per second.
pub const KNIFE_FIRE_RATE: f64 = 1.0;

// --- Projectiles ---

/// Distance outside the world bounds after which a projectile is retired.
pub const PROJECTILE_WORLD_MARGIN: f64 = 50.0;

/// Hard lifetime ceiling for any projectile (seconds).
pub const PROJECTILE_MAX_LIFETIME_SECS: f64 = 6.0;

// --- Effects ---

pub const SLASH_EFFECT_SECS: f64 = 0.15;
pub const EXPLOSION_EFFECT_SECS: f64 = 0.5;

// --- Rounds ---

/// Grace delay between clearing a round and spawning the next (seconds).
pub const ROUND_ADVANCE_DELAY_SECS: f64 = 2.0;

pub const SPAWN_BASE_COUNT: u32 = 5;
pub const SPAWN_GROWTH_FACTOR: f64 = 1.5;

/// First round in which ranged enemies appear.
pub const RANGER_START_ROUND: u32 = 3;
pub const RANGER_CAP: u32 = 4;

/// Rejection-sampling attempts allowed per enemy in a batch.
pub const SPAWN_ATTEMPTS_PER_ENEMY: u32 = 50;

/// Minimum spacing between spawned enemies as a multiple of their size.
pub const SPAWN_SPACING_FACTOR: f64 = 5.0;

// --- Progression ---

pub const KILLS_PER_LEVEL: u32 = 10;

/// Level-up choice: speed gain as a fraction of the current speed.
pub const UPGRADE_SPEED_FRACTION: f64 = 0.2;
pub const UPGRADE_DAMAGE_BONUS: f64 = 5.0;

/// Level-up choice: fraction by which the time between shots shrinks.
pub const UPGRADE_SHOT_INTERVAL_REDUCTION: f64 = 0.15;
pub const UPGRADE_LIFE_BONUS: f64 = 1.0;
