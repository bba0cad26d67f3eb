//! Commands sent from collaborators to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::components::{Item, Upgrade};

/// Snapshot of the directional keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// All possible commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// Replace the held-keys snapshot used from the next frame on.
    SetInput { input: InputState },

    // --- Inventory ---
    /// Add an item to the inventory. Ignored if the id is already held.
    GrantItem { item: Item },

    // --- Progression ---
    /// Apply the upgrade chosen from an offer and resume play.
    ApplyUpgrade { upgrade: Upgrade },

    // --- Simulation control ---
    /// Start (or restart after death) a session at round 1.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
