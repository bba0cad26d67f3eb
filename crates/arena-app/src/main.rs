//! Headless arena driver.
//!
//! Usage: `arena-headless [CONFIG_JSON] [SECONDS]`
//!
//! Runs a real-time session with the stock collaborators and a scripted
//! autopilot, then prints the score summary as JSON. Log verbosity follows
//! `RUST_LOG` (default `arena_sim=info,arena_app=info`).

use std::process::ExitCode;
use std::time::{Duration, Instant};

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use arena_app::collaborators::{AutoUpgrade, EventLog, ScoreBoard};
use arena_app::error::AppError;
use arena_app::session;
use arena_app::state::AppState;
use arena_core::commands::{InputState, PlayerCommand};
use arena_core::components::Item;
use arena_core::config::SimConfig;
use arena_core::enums::{GamePhase, Rarity};
use arena_sim::dispatch::Collaborator;

const DEFAULT_RUN_SECS: u64 = 30;

/// Direction changes of the autopilot, one per second.
const PATROL: [InputState; 4] = [
    InputState {
        up: true,
        down: false,
        left: false,
        right: true,
    },
    InputState {
        up: false,
        down: true,
        left: false,
        right: true,
    },
    InputState {
        up: false,
        down: true,
        left: true,
        right: false,
    },
    InputState {
        up: true,
        down: false,
        left: true,
        right: false,
    },
];

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("arena-headless: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("arena_sim=info".parse()?)
                .add_directive("arena_app=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };
    let run_for = Duration::from_secs(
        args.next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RUN_SECS),
    );
    info!(seed = config.seed, secs = run_for.as_secs(), "starting headless session");

    let scoreboard = ScoreBoard::new();
    let summary = scoreboard.summary();
    let state = AppState::new();
    session::start_simulation(
        &state,
        config,
        Box::new(move || {
            vec![
                Box::new(scoreboard) as Box<dyn Collaborator>,
                Box::new(AutoUpgrade::default()),
                Box::new(EventLog::default()),
            ]
        }),
    )?;

    session::send_command(&state, PlayerCommand::StartSession)?;
    session::send_command(
        &state,
        PlayerCommand::GrantItem {
            item: Item::new("knife", Rarity::Common),
        },
    )?;

    let started = Instant::now();
    let mut leg = 0usize;
    while started.elapsed() < run_for {
        std::thread::sleep(Duration::from_secs(1));
        leg += 1;
        session::send_command(
            &state,
            PlayerCommand::SetInput {
                input: PATROL[leg % PATROL.len()],
            },
        )?;
        if leg == 10 {
            session::send_command(
                &state,
                PlayerCommand::GrantItem {
                    item: Item::new("SMG", Rarity::Rare),
                },
            )?;
        }
        if let Some(snapshot) = session::get_snapshot(&state)? {
            if snapshot.phase == GamePhase::GameOver {
                info!(score = snapshot.score.score, "player died, restarting");
                session::send_command(&state, PlayerCommand::StartSession)?;
            }
        }
    }

    session::stop_simulation(&state)?;

    let summary = summary.lock().map_err(|_| AppError::LockPoisoned)?.clone();
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize summary: {e}"),
    }
    Ok(())
}
