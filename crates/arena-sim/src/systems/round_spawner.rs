//! Round progression and enemy placement.
//!
//! A round is cleared when no live enemy remains. After the grace delay the
//! next round is populated by rejection sampling: candidates inside the
//! player's viewport (plus margin) or too close to an already placed enemy
//! are rejected. When the batch's attempt budget runs out, the remaining
//! enemies are placed without constraints and the relaxation is reported.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use arena_ai::profiles::get_profile;
use arena_core::collision::{inflate_rect, point_in_rect};
use arena_core::config::{SimConfig, SpawnConfig};
use arena_core::enums::EnemyKind;
use arena_core::events::SimEvent;
use arena_core::types::{Extent, Position};

use crate::player::Player;
use crate::roster::EnemyRoster;
use crate::world_setup;

/// Population of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPlan {
    pub round: u32,
    pub basic: u32,
    pub ranged: u32,
}

impl RoundPlan {
    pub fn for_round(round: u32, spawn: &SpawnConfig) -> Self {
        Self {
            round,
            basic: basic_count(round, spawn),
            ranged: ranged_count(round, spawn),
        }
    }

    pub fn total(&self) -> u32 {
        self.basic.saturating_add(self.ranged)
    }

    /// Kinds in placement order: basics first, then rangers.
    pub fn kinds(&self) -> impl Iterator<Item = EnemyKind> {
        std::iter::repeat(EnemyKind::Basic)
            .take(self.basic as usize)
            .chain(std::iter::repeat(EnemyKind::Ranged).take(self.ranged as usize))
    }
}

/// `max(1, round(base * growth^(round - 1)))`.
pub fn basic_count(round: u32, spawn: &SpawnConfig) -> u32 {
    let exponent = round.saturating_sub(1) as i32;
    let count = (f64::from(spawn.base_count) * spawn.growth_factor.powi(exponent)).round();
    (count as u32).max(1)
}

/// Zero before the ranger start round, then one more per round up to the cap.
pub fn ranged_count(round: u32, spawn: &SpawnConfig) -> u32 {
    if round < spawn.ranger_start_round {
        return 0;
    }
    (round - spawn.ranger_start_round + 1).min(spawn.ranger_cap)
}

/// Placement bounds for a batch.
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    pub world: Extent,
    pub wall: f64,
    /// Rectangle in which enemy centers are not allowed.
    pub exclusion: Option<(Position, Extent)>,
}

impl SpawnArea {
    pub fn new(config: &SimConfig, player: &Player) -> Self {
        let exclusion = config.spawn.avoid_viewport.then(|| {
            let center = player.center();
            let viewport = Extent::new(config.viewport_width, config.viewport_height);
            let origin = Position::new(center.x - viewport.w / 2.0, center.y - viewport.h / 2.0);
            inflate_rect(origin, viewport, config.spawn.viewport_margin)
        });
        Self {
            world: Extent::new(config.world_width, config.world_height),
            wall: config.wall(),
            exclusion,
        }
    }

    fn random_position(&self, size: f64, rng: &mut ChaCha8Rng) -> Position {
        let x = self.random_axis(self.world.w, size, rng);
        let y = self.random_axis(self.world.h, size, rng);
        Position::new(x, y)
    }

    /// Uniform coordinate keeping a box of `size` inside the walls.
    fn random_axis(&self, extent: f64, size: f64, rng: &mut ChaCha8Rng) -> f64 {
        let min = self.wall;
        let max = extent - self.wall - size;
        if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: EnemyKind,
    /// Top-left corner.
    pub position: Position,
}

#[derive(Debug, Clone, Default)]
pub struct SpawnOutcome {
    pub placements: Vec<Placement>,
    /// Enemies placed after the attempt budget ran out.
    pub relaxed: u32,
}

/// Choose positions for every enemy in `plan`. Always returns exactly
/// `plan.total()` placements.
pub fn place(
    plan: &RoundPlan,
    area: &SpawnArea,
    spawn: &SpawnConfig,
    rng: &mut ChaCha8Rng,
) -> SpawnOutcome {
    let budget = plan.total().saturating_mul(spawn.attempts_per_enemy);
    let mut attempts = 0u32;
    let mut outcome = SpawnOutcome::default();

    for kind in plan.kinds() {
        let size = get_profile(kind).size;
        let min_distance = size * spawn.spacing_factor;

        let position = loop {
            if attempts >= budget {
                outcome.relaxed += 1;
                break area.random_position(size, rng);
            }
            attempts += 1;

            let candidate = area.random_position(size, rng);
            let center = candidate.box_center(size);
            if let Some((origin, extent)) = area.exclusion {
                if point_in_rect(center, origin, extent) {
                    continue;
                }
            }
            let crowded = outcome.placements.iter().any(|placed| {
                let placed_size = get_profile(placed.kind).size;
                placed.position.box_center(placed_size).distance_to(&center) < min_distance
            });
            if !crowded {
                break candidate;
            }
        };
        outcome.placements.push(Placement { kind, position });
    }
    outcome
}

/// Populate `round` into the world and report it.
#[allow(clippy::too_many_arguments)]
pub fn spawn_round(
    world: &mut World,
    roster: &mut EnemyRoster,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    player: &Player,
    round: u32,
    now: f64,
    events: &mut Vec<SimEvent>,
) -> RoundPlan {
    roster.begin_round();

    let plan = RoundPlan::for_round(round, &config.spawn);
    let area = SpawnArea::new(config, player);
    let outcome = place(&plan, &area, &config.spawn, rng);

    for placement in &outcome.placements {
        world_setup::spawn_enemy(world, roster, placement.kind, placement.position, now);
    }

    info!(round, basic = plan.basic, ranged = plan.ranged, "round spawned");
    events.push(SimEvent::RoundAdvanced {
        round,
        basic: plan.basic,
        ranged: plan.ranged,
    });
    if outcome.relaxed > 0 {
        warn!(round, relaxed = outcome.relaxed, "spawn constraints relaxed");
        events.push(SimEvent::SpawnRelaxed {
            round,
            relaxed: outcome.relaxed,
        });
    }
    plan
}

/// Outcome of one round-state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTick {
    /// Enemies remain, or the grace delay is still running.
    Holding,
    /// The round was just cleared; the grace delay starts now.
    Cleared,
    /// The grace delay elapsed; the next round should spawn.
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundState {
    pub number: u32,
    /// When the round was cleared. Reset if enemies reappear.
    pub cleared_at_secs: Option<f64>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            number: 1,
            cleared_at_secs: None,
        }
    }
}

impl RoundState {
    pub fn update(&mut self, live_enemies: usize, now: f64, delay: f64) -> RoundTick {
        if live_enemies > 0 {
            self.cleared_at_secs = None;
            return RoundTick::Holding;
        }
        match self.cleared_at_secs {
            None => {
                self.cleared_at_secs = Some(now);
                RoundTick::Cleared
            }
            Some(cleared) if now - cleared >= delay => {
                self.number += 1;
                self.cleared_at_secs = None;
                RoundTick::Advance
            }
            Some(_) => RoundTick::Holding,
        }
    }
}
