//! Failure kinds shared by every fallible core operation.

/// An operation was rejected before it mutated anything.
///
/// Both variants are caller programming errors: the core never retries and
/// never swallows them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The session, floor, or combatant is not in the state the call requires.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An argument was out of range, negative, empty, or referenced something absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GameError {
    pub(crate) fn state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub(crate) fn argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type GameResult<T> = Result<T, GameError>;
