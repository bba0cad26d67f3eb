//! Simulation engine for the arena.
//!
//! Owns the hecs ECS world, runs systems once per frame with an injected
//! delta, and produces GameStateSnapshots for collaborators.

pub mod dispatch;
pub mod engine;
pub mod player;
pub mod roster;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use arena_core as core;
pub use engine::SimulationEngine;
