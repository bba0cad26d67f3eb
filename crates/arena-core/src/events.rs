//! Events emitted by the simulation for scoring, progression and UI collaborators.
//!
//! Each frame's events are returned in the snapshot and dispatched by the
//! driver; the core never calls collaborators directly.

use serde::{Deserialize, Serialize};

use crate::components::Upgrade;
use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new session started at round 1.
    SessionStarted,
    /// An enemy was killed. Emitted once per enemy id.
    EnemyKilled {
        enemy_id: u32,
        kind: EnemyKind,
        score_value: u32,
        weapon: WeaponKind,
    },
    /// Score moved by `delta` to `total`.
    ScoreChanged { delta: u32, total: u32 },
    /// Player lost lives.
    PlayerHit { damage: u32, lives_remaining: u32 },
    /// Lives reached zero. Emitted exactly once per session.
    PlayerDied { final_score: u32, round: u32 },
    /// The last enemy of a round died; the grace delay starts.
    RoundCleared { round: u32 },
    /// A new round was populated.
    RoundAdvanced { round: u32, basic: u32, ranged: u32 },
    /// Placement budget ran out; `relaxed` enemies were placed unconstrained.
    SpawnRelaxed { round: u32, relaxed: u32 },
    /// Simulation paused until one of `choices` is applied.
    UpgradeOffered {
        reason: UpgradeReason,
        choices: Vec<Upgrade>,
    },
    UpgradeApplied { upgrade: Upgrade },
    /// A weapon gate found its unlocking item for the first time.
    ItemPickedUp { item_id: String, weapon: WeaponKind },
}
