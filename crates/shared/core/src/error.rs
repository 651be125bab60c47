use thiserror::Error;

/// Contract violations raised by the game domain and the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

pub type GameResult<T> = std::result::Result<T, GameError>;
