//! Stock collaborators: score tracking, automatic upgrade choice and
//! structured event logging.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use arena_core::commands::PlayerCommand;
use arena_core::enums::UpgradeKind;
use arena_core::events::SimEvent;
use arena_sim::dispatch::{Collaborator, CollaboratorError};

/// Running totals kept by [`ScoreBoard`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub kills: u32,
    pub best_score: u32,
    pub sessions: u32,
    pub rounds_cleared: u32,
    /// Final score of the most recent finished session.
    pub last_final_score: Option<u32>,
}

/// Tracks score across sessions. The summary is shared so the driver can
/// read it while the game loop owns the collaborator.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    summary: Arc<Mutex<ScoreSummary>>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Arc<Mutex<ScoreSummary>> {
        Arc::clone(&self.summary)
    }
}

impl Collaborator for ScoreBoard {
    fn name(&self) -> &str {
        "scoreboard"
    }

    fn on_event(
        &mut self,
        event: &SimEvent,
        _replies: &mut Vec<PlayerCommand>,
    ) -> Result<(), CollaboratorError> {
        let mut summary = self
            .summary
            .lock()
            .map_err(|_| CollaboratorError::Failed("score summary lock poisoned".into()))?;
        match event {
            SimEvent::SessionStarted => {
                summary.sessions += 1;
                summary.score = 0;
                summary.kills = 0;
                summary.rounds_cleared = 0;
            }
            SimEvent::EnemyKilled { .. } => summary.kills += 1,
            SimEvent::ScoreChanged { total, .. } => {
                summary.score = *total;
                summary.best_score = summary.best_score.max(*total);
            }
            SimEvent::RoundCleared { .. } => summary.rounds_cleared += 1,
            SimEvent::PlayerDied { final_score, .. } => {
                summary.last_final_score = Some(*final_score);
                summary.best_score = summary.best_score.max(*final_score);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Answers every upgrade offer with the first choice matching the
/// preference list, falling back to the first choice offered.
#[derive(Debug, Clone)]
pub struct AutoUpgrade {
    preference: Vec<UpgradeKind>,
}

impl AutoUpgrade {
    pub fn new(preference: Vec<UpgradeKind>) -> Self {
        Self { preference }
    }
}

impl Default for AutoUpgrade {
    fn default() -> Self {
        Self::new(vec![
            UpgradeKind::Damage,
            UpgradeKind::FireRate,
            UpgradeKind::Life,
            UpgradeKind::Speed,
        ])
    }
}

impl Collaborator for AutoUpgrade {
    fn name(&self) -> &str {
        "auto-upgrade"
    }

    fn on_event(
        &mut self,
        event: &SimEvent,
        replies: &mut Vec<PlayerCommand>,
    ) -> Result<(), CollaboratorError> {
        let SimEvent::UpgradeOffered { choices, .. } = event else {
            return Ok(());
        };
        let choice = self
            .preference
            .iter()
            .find_map(|kind| choices.iter().find(|c| c.kind == *kind))
            .or_else(|| choices.first())
            .copied()
            .ok_or_else(|| CollaboratorError::Failed("upgrade offer had no choices".into()))?;
        debug!(kind = ?choice.kind, value = choice.value, "upgrade chosen");
        replies.push(PlayerCommand::ApplyUpgrade { upgrade: choice });
        Ok(())
    }
}

/// Logs every event as JSON and keeps a count.
#[derive(Debug, Default)]
pub struct EventLog {
    pub logged: usize,
}

impl Collaborator for EventLog {
    fn name(&self) -> &str {
        "event-log"
    }

    fn on_event(
        &mut self,
        event: &SimEvent,
        _replies: &mut Vec<PlayerCommand>,
    ) -> Result<(), CollaboratorError> {
        let json =
            serde_json::to_string(event).map_err(|e| CollaboratorError::Failed(e.to_string()))?;
        match event {
            SimEvent::EnemyKilled { .. } | SimEvent::ScoreChanged { .. } => {
                debug!(target: "arena_app::events", "{json}");
            }
            _ => info!(target: "arena_app::events", "{json}"),
        }
        self.logged += 1;
        Ok(())
    }
}
