//! Error taxonomy for pairing commands.
//!
//! Every command validates before it mutates, so an `Err` always means the
//! session state is unchanged.

use thiserror::Error;

use crate::store::StoreError;

/// Result alias used by all session commands.
pub type PairingResult<T> = Result<T, PairingError>;

/// Errors returned by pairing commands.
#[derive(Error, Debug)]
pub enum PairingError {
    /// Bad player name, handicap text, hole number or settings value.
    #[error("{0}")]
    Validation(String),

    /// Too few players to group, or a group is empty.
    #[error("{0}")]
    InsufficientPlayers(String),

    /// Hole is full, or the team already occupies a hole.
    #[error("{0}")]
    Capacity(String),

    /// Referenced team, assignment or draft pool entry does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Command issued in the wrong draft phase.
    #[error("{0}")]
    State(String),

    /// Persistence failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Category tag of a [`PairingError`], for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InsufficientPlayers,
    Capacity,
    NotFound,
    State,
    Store,
}

impl PairingError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn insufficient_players(message: impl Into<String>) -> Self {
        Self::InsufficientPlayers(message.into())
    }

    pub fn capacity(message: impl Into<String>) -> Self {
        Self::Capacity(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PairingError::Validation(_) => ErrorKind::Validation,
            PairingError::InsufficientPlayers(_) => ErrorKind::InsufficientPlayers,
            PairingError::Capacity(_) => ErrorKind::Capacity,
            PairingError::NotFound(_) => ErrorKind::NotFound,
            PairingError::State(_) => ErrorKind::State,
            PairingError::Store(_) => ErrorKind::Store,
        }
    }
}
