//! Command surface over a running game loop: start, send, poll, stop.

use tracing::info;

use arena_core::commands::PlayerCommand;
use arena_core::config::SimConfig;
use arena_core::state::GameStateSnapshot;

use crate::error::AppError;
use crate::game_loop::{self, CollaboratorFactory};
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    collaborators: CollaboratorFactory,
) -> Result<(), AppError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, collaborators, state.latest_snapshot.clone())?;
    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take()
        .ok_or(AppError::NotStarted)?;
    // A send error means the loop already exited.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            tracing::error!("game loop thread panicked");
        }
    }
    info!("simulation stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::enums::GamePhase;
    use arena_sim::dispatch::Collaborator;
    use std::time::Duration;

    fn no_collaborators() -> CollaboratorFactory {
        Box::new(Vec::<Box<dyn Collaborator>>::new)
    }

    #[test]
    fn test_commands_before_start_fail() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_send_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default(), no_collaborators()).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default(), no_collaborators()),
            Err(AppError::AlreadyRunning)
        ));

        send_command(&state, PlayerCommand::StartSession).unwrap();
        send_command(&state, PlayerCommand::Pause).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Paused);

        stop_simulation(&state).unwrap();
        assert!(matches!(
            send_command(&state, PlayerCommand::Resume),
            Err(AppError::NotStarted)
        ));
    }
}
