use crate::config::ConfigError;
use monty_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
