use thiserror::Error;

use arena_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop is gone")]
    ChannelClosed,
    #[error("shared state lock poisoned")]
    LockPoisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("bad log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
