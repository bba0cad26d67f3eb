//! ECS systems that operate on the arena world each frame.
//!
//! Systems are plain functions taking `&mut World` plus whatever engine
//! state they touch. Frame order is fixed by `SimulationEngine`.

pub mod cleanup;
pub mod contact;
pub mod enemy_ai;
pub mod kills;
pub mod movement;
pub mod player_control;
pub mod progression;
pub mod projectiles;
pub mod query;
pub mod ranged_attack;
pub mod round_spawner;
pub mod snapshot;
pub mod weapons;
