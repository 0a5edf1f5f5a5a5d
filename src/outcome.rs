//! Structured command results for a presentation layer.
//!
//! A UI receives `{ "success": true, "payload": ... }` or
//! `{ "success": false, "kind": "capacity", "message": "..." }` instead of
//! a Rust `Result`.

use serde::Serialize;

use crate::error::{ErrorKind, PairingError};

/// Serializable result of a session command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutcome<T> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Command result on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    /// Error category on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> CommandOutcome<T> {
    /// A successful outcome.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            kind: None,
            message: None,
        }
    }

    /// A failed outcome.
    pub fn failed(error: &PairingError) -> Self {
        Self {
            success: false,
            payload: None,
            kind: Some(kind_name(error.kind())),
            message: Some(error.to_string()),
        }
    }
}

impl<T> From<Result<T, PairingError>> for CommandOutcome<T> {
    fn from(result: Result<T, PairingError>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(err) => Self::failed(&err),
        }
    }
}

fn kind_name(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "validation",
        ErrorKind::InsufficientPlayers => "insufficientPlayers",
        ErrorKind::Capacity => "capacity",
        ErrorKind::NotFound => "notFound",
        ErrorKind::State => "state",
        ErrorKind::Store => "store",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_json() {
        let outcome: CommandOutcome<u32> = Ok(3).into();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "payload": 3 }));
    }

    #[test]
    fn test_failure_json() {
        let outcome: CommandOutcome<()> = Err(PairingError::capacity("Hole 3 is full")).into();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "kind": "capacity",
                "message": "Hole 3 is full"
            })
        );
    }
}
