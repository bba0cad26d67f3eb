//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems with an injected frame delta, and produces
//! `GameStateSnapshot`s. Completely headless, so every behavior is
//! deterministic under a fixed seed and delta sequence.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use arena_core::commands::{InputState, PlayerCommand};
use arena_core::components::Upgrade;
use arena_core::config::SimConfig;
use arena_core::enums::{GamePhase, UpgradeReason, WeaponKind};
use arena_core::events::SimEvent;
use arena_core::state::GameStateSnapshot;
use arena_core::types::SimClock;

use crate::dispatch::{self, Collaborator, DispatchReport};
use crate::player::Player;
use crate::roster::{EnemyRoster, ScoreState};
use crate::systems;
use crate::systems::round_spawner::{RoundState, RoundTick};
use crate::weapons::WeaponLoadout;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    clock: SimClock,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,

    input: InputState,
    player: Player,
    loadout: WeaponLoadout,
    roster: EnemyRoster,
    score: ScoreState,
    rounds: RoundState,
    next_projectile_id: u32,

    pending_upgrades: Vec<Upgrade>,
    queued_offers: VecDeque<UpgradeReason>,
    /// Set when leaving a frozen phase; the next active frame integrates zero time.
    skip_next_dt: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let player = Player::spawn(&config);
        Self {
            world: World::new(),
            clock: SimClock::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            input: InputState::default(),
            player,
            loadout: WeaponLoadout::default(),
            roster: EnemyRoster::default(),
            score: ScoreState::default(),
            rounds: RoundState::default(),
            next_projectile_id: 0,
            pending_upgrades: Vec::new(),
            queued_offers: VecDeque::new(),
            skip_next_dt: false,
            config,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// Commands are applied first. Systems only run while `Active`; the
    /// delta is clamped to `[0, max_frame_dt]` and the first active frame
    /// after a pause or upgrade choice integrates zero time.
    pub fn frame(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = if std::mem::take(&mut self.skip_next_dt) || !dt.is_finite() {
                0.0
            } else {
                dt.clamp(0.0, self.config.max_frame_dt)
            };
            self.run_systems(dt);
            self.clock.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            systems::snapshot::SnapshotInput {
                clock: self.clock,
                phase: self.phase,
                round: self.rounds.number,
                player: &self.player,
                score: &self.score,
                pending_upgrades: self.pending_upgrades.clone(),
                events,
            },
        )
    }

    /// Deliver `events` to every collaborator and queue their replies for
    /// the next frame. Failures are logged and isolated.
    pub fn dispatch(
        &mut self,
        events: &[SimEvent],
        collaborators: &mut [Box<dyn Collaborator>],
    ) -> DispatchReport {
        let report = dispatch::dispatch_events(events, collaborators);
        self.queue_commands(report.replies.iter().cloned());
        report
    }

    /// Report an enemy death from outside the frame (e.g. an external hit
    /// resolver). Unknown or already-dead ids are ignored.
    pub fn kill_enemy(&mut self, enemy_id: u32, weapon: WeaponKind) -> bool {
        systems::kills::kill(
            &mut self.world,
            &mut self.roster,
            enemy_id,
            weapon,
            &mut self.score,
            self.clock.now(),
            &mut self.events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn round(&self) -> u32 {
        self.rounds.number
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn live_enemy_count(&self) -> usize {
        systems::query::live_enemy_count(&self.world)
    }

    /// Mutable player access (for tests that stage lives or positions).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Despawn every enemy without scoring (for tests needing an empty arena).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<(Entity, u32)> = self
            .world
            .query::<&arena_core::components::EnemyInfo>()
            .iter()
            .map(|(entity, info)| (entity, info.id))
            .collect();
        for (entity, id) in enemies {
            self.roster.forget(id);
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an enemy at a chosen top-left position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        kind: arena_core::enums::EnemyKind,
        position: arena_core::types::Position,
    ) -> u32 {
        crate::world_setup::spawn_enemy(
            &mut self.world,
            &mut self.roster,
            kind,
            position,
            self.clock.now(),
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_session();
                } else {
                    debug!(phase = ?self.phase, "start ignored, session already running");
                }
            }
            PlayerCommand::SetInput { input } => {
                self.input = input;
            }
            PlayerCommand::GrantItem { item } => {
                let id = item.id.clone();
                if self.player.grant_item(item) {
                    info!(item = %id, "item granted");
                } else {
                    debug!(item = %id, "duplicate item ignored");
                }
            }
            PlayerCommand::ApplyUpgrade { upgrade } => {
                if self.phase == GamePhase::AwaitingUpgrade {
                    self.apply_upgrade(upgrade);
                } else {
                    warn!(?upgrade, phase = ?self.phase, "upgrade outside of an offer ignored");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    self.skip_next_dt = true;
                }
            }
        }
    }

    fn start_session(&mut self) {
        self.reset_session();
        self.spawn_round();
    }

    /// Start a session with no enemies (for tests that stage their own).
    #[cfg(test)]
    pub fn start_empty_session(&mut self) {
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.world.clear();
        self.clock = SimClock::default();
        self.player = Player::spawn(&self.config);
        self.loadout = WeaponLoadout::default();
        self.roster.reset();
        self.score = ScoreState::default();
        self.rounds = RoundState::default();
        self.pending_upgrades.clear();
        self.queued_offers.clear();
        self.skip_next_dt = false;
        self.phase = GamePhase::Active;

        info!(seed = self.config.seed, "session started");
        self.events.push(SimEvent::SessionStarted);
    }

    fn spawn_round(&mut self) {
        systems::round_spawner::spawn_round(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            &self.config,
            &self.player,
            self.rounds.number,
            self.clock.now(),
            &mut self.events,
        );
    }

    fn offer_upgrade(&mut self, reason: UpgradeReason) {
        if self.phase == GamePhase::AwaitingUpgrade {
            self.queued_offers.push_back(reason);
            return;
        }
        self.pending_upgrades = self.player.upgrade_choices();
        self.phase = GamePhase::AwaitingUpgrade;
        info!(?reason, "upgrade offered");
        self.events.push(SimEvent::UpgradeOffered {
            reason,
            choices: self.pending_upgrades.clone(),
        });
    }

    fn apply_upgrade(&mut self, upgrade: Upgrade) {
        self.player.apply_upgrade(upgrade);
        self.pending_upgrades.clear();
        info!(kind = ?upgrade.kind, value = upgrade.value, "upgrade applied");
        self.events.push(SimEvent::UpgradeApplied { upgrade });

        self.phase = GamePhase::Active;
        self.skip_next_dt = true;
        if let Some(reason) = self.queued_offers.pop_front() {
            self.offer_upgrade(reason);
        }
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.input = InputState::default();
        info!(score = self.score.score, round = self.rounds.number, "game over");
        self.events.push(SimEvent::PlayerDied {
            final_score: self.score.score,
            round: self.rounds.number,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.clock.now();

        // 1. Player movement
        systems::player_control::run(&mut self.player, &self.input, &self.config, dt);
        // 2. Enemy steering
        systems::enemy_ai::run(&mut self.world, &self.player, dt);
        // 3. Contact damage
        systems::contact::run(&mut self.world, &mut self.player, now, &mut self.events);
        // 4. Ranged enemy fire
        systems::ranged_attack::run(
            &mut self.world,
            &self.player,
            now,
            &mut self.next_projectile_id,
        );
        // 5. Player weapons (melee hits resolve immediately)
        let melee_hits = systems::weapons::run(
            &mut self.world,
            &self.player,
            &mut self.loadout,
            now,
            &mut self.next_projectile_id,
            &mut self.events,
        );
        systems::kills::apply_hits(
            &mut self.world,
            &mut self.roster,
            &melee_hits,
            &mut self.score,
            now,
            &mut self.events,
        );
        // 6. Projectile integration
        systems::movement::run(&mut self.world, dt);
        // 7. Projectile retirement and hits
        let hits = systems::projectiles::run(
            &mut self.world,
            &mut self.player,
            &self.config,
            now,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        systems::kills::apply_hits(
            &mut self.world,
            &mut self.roster,
            &hits,
            &mut self.score,
            now,
            &mut self.events,
        );
        // 8. Cleanup (dead enemies, expired effects)
        systems::cleanup::run(&mut self.world, &mut self.roster, now, &mut self.despawn_buffer);

        // 9. Death transition (exactly once)
        if self.player.dead {
            self.enter_game_over();
            return;
        }

        // 10. Level-ups
        if systems::progression::check_level_up(&mut self.score, self.config.kills_per_level) {
            self.offer_upgrade(UpgradeReason::LevelUp);
        }

        // 11. Round progression
        let live = systems::query::live_enemy_count(&self.world);
        let delay = self.config.round_advance_delay_secs;
        match self.rounds.update(live, now, delay) {
            RoundTick::Holding => {}
            RoundTick::Cleared => {
                info!(round = self.rounds.number, "round cleared");
                self.events.push(SimEvent::RoundCleared {
                    round: self.rounds.number,
                });
            }
            RoundTick::Advance => {
                self.spawn_round();
                if self.config.upgrade_on_round_advance {
                    self.offer_upgrade(UpgradeReason::RoundAdvanced);
                }
            }
        }
    }
}
