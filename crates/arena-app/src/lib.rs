//! Arena application layer.
//!
//! Runs the simulation engine on a real-time game-loop thread, routes
//! player commands to it over a channel, and dispatches each frame's
//! events to the scoring, progression and logging collaborators.

pub mod collaborators;
pub mod error;
pub mod game_loop;
pub mod session;
pub mod state;

pub use arena_core as core;
