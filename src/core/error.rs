//! Error taxonomy for the rule engine.
//!
//! All errors are caller errors raised before any state is touched. Nothing
//! here is retryable; the engine does no I/O.

use thiserror::Error;

/// Errors returned by game operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid player count {count} (expected {min}..={max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("player name at seat {index} is empty")]
    EmptyPlayerName { index: usize },

    #[error("not enough cards to deal (needed={needed}, available={available})")]
    NotEnoughCards { needed: usize, available: usize },

    #[error("no game currently running")]
    NoActiveGame,

    #[error("invalid card selection (hand={hand:?}, middle={middle:?})")]
    InvalidSelection {
        hand: Option<usize>,
        middle: Option<usize>,
    },

    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidPlayerCount { count: 1, min: 2, max: 4 };
        assert_eq!(err.to_string(), "invalid player count 1 (expected 2..=4)");

        assert_eq!(GameError::NoActiveGame.to_string(), "no game currently running");

        let err = GameError::InvalidSelection { hand: Some(0), middle: None };
        assert_eq!(
            err.to_string(),
            "invalid card selection (hand=Some(0), middle=None)"
        );
    }
}
