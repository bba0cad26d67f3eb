//! Enemy AI for the arena simulation.
//!
//! Implements chase-and-separate steering, nearest-target selection
//! and per-kind behavior profiles. No ECS dependency — operates on plain data.

pub mod profiles;
pub mod steering;
pub mod targeting;

pub use arena_core as core;

#[cfg(test)]
mod tests;
