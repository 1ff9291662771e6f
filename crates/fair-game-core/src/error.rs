//! Error types for the game core.

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors from game core operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] InvalidMoveSet),

    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Move index {index} out of range for {len} moves")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Reasons a list of move labels cannot form a move set
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveSet {
    #[error("need at least 3 moves, got {count}")]
    TooFew { count: usize },

    #[error("need an odd number of moves, got {count}")]
    EvenCount { count: usize },

    #[error("move {label:?} is repeated")]
    Duplicate { label: String },

    #[error("move at position {position} is empty")]
    EmptyLabel { position: usize },
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        GameError::RandomnessUnavailable(err.to_string())
    }
}

impl From<hex::FromHexError> for GameError {
    fn from(err: hex::FromHexError) -> Self {
        GameError::InvalidEncoding(err.to_string())
    }
}
