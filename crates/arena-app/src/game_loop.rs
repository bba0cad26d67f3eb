//! Game loop thread — runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine and the collaborators are created inside this thread. Commands
//! arrive via an `mpsc` channel; the latest snapshot is stored in shared
//! state for polling. Each frame is fed the measured wall-clock delta.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use arena_core::config::SimConfig;
use arena_core::constants::TARGET_FRAME_RATE;
use arena_core::state::GameStateSnapshot;
use arena_sim::dispatch::Collaborator;
use arena_sim::SimulationEngine;

use crate::error::AppError;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// Builds the collaborators on the game loop thread.
pub type CollaboratorFactory = Box<dyn FnOnce() -> Vec<Box<dyn Collaborator>> + Send>;

/// Measures the wall-clock time between frames.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction).
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    collaborators: CollaboratorFactory,
    latest_snapshot: SharedSnapshot,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    config.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, collaborators, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Advance one frame, dispatch its events and publish the snapshot.
pub fn step(
    engine: &mut SimulationEngine,
    collaborators: &mut [Box<dyn Collaborator>],
    dt: f64,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> GameStateSnapshot {
    let snapshot = engine.frame(dt);
    let report = engine.dispatch(&snapshot.events, collaborators);
    if !report.replies.is_empty() {
        debug!(replies = report.replies.len(), "collaborator replies queued");
    }
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot.clone());
    }
    snapshot
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    collaborators: CollaboratorFactory,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut collaborators = collaborators();
    let mut clock = FrameClock::new();
    let mut next_frame_time = Instant::now();
    info!(collaborators = collaborators.len(), "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(frames = engine.clock().frame, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame with the measured delta (the engine clamps it
        //    and handles pause semantics)
        let dt = clock.tick();
        step(&mut engine, &mut collaborators, dt, latest_snapshot);

        // 3. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{AutoUpgrade, EventLog};
    use arena_core::commands::PlayerCommand;
    use arena_core::enums::{GamePhase, UpgradeKind};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartSession)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_step_publishes_snapshot_and_applies_replies() {
        let mut engine = SimulationEngine::new(SimConfig {
            kills_per_level: 1,
            ..Default::default()
        });
        let mut collaborators: Vec<Box<dyn Collaborator>> = vec![
            Box::new(EventLog::default()),
            Box::new(AutoUpgrade::new(vec![UpgradeKind::Damage])),
        ];
        let latest = Mutex::new(None);

        engine.queue_command(PlayerCommand::StartSession);
        let first = step(&mut engine, &mut collaborators, 0.0, &latest);
        let id = first.enemies[0].id;
        assert!(engine.kill_enemy(id, arena_core::enums::WeaponKind::Pistol));

        let offered = step(&mut engine, &mut collaborators, 1.0 / 60.0, &latest);
        assert_eq!(offered.phase, GamePhase::AwaitingUpgrade);

        // AutoUpgrade replied during dispatch; the choice lands this frame.
        let applied = step(&mut engine, &mut collaborators, 1.0 / 60.0, &latest);
        assert_eq!(applied.phase, GamePhase::Active);
        assert!(applied.player.stats.damage > offered.player.stats.damage);

        let stored = latest.lock().unwrap();
        assert_eq!(stored.as_ref().map(|s| s.time.frame), Some(applied.time.frame));
    }

    #[test]
    fn test_spawned_loop_runs_and_shuts_down() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            Box::new(|| vec![Box::new(EventLog::default()) as Box<dyn Collaborator>]),
            latest.clone(),
        )
        .unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();
        std::thread::sleep(Duration::from_millis(100));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(!snapshot.enemies.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_spawn() {
        let result = spawn_game_loop(
            SimConfig {
                max_frame_dt: 0.0,
                ..Default::default()
            },
            Box::new(Vec::<Box<dyn Collaborator>>::new),
            Arc::new(Mutex::new(None)),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_frame_clock_measures_elapsed() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= 0.005);
        assert!(clock.tick() < dt);
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
