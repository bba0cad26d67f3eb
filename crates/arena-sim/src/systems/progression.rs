//! Level-up detection.

use crate::roster::ScoreState;

/// Kill count at which the next level-up is offered.
pub fn next_level_at(score: &ScoreState, kills_per_level: u32) -> u32 {
    (score.level + 1).saturating_mul(kills_per_level.max(1))
}

/// Grant at most one level per call once the kill threshold is reached.
pub fn check_level_up(score: &mut ScoreState, kills_per_level: u32) -> bool {
    if score.kills < next_level_at(score, kills_per_level) {
        return false;
    }
    score.level += 1;
    true
}
