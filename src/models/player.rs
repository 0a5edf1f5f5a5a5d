//! Player model and registry input validation.
//!
//! Handicaps are entered as text. A leading `+` marks a plus handicap
//! (a player better than scratch), which ranks below zero:
//!
//! | Input | `handicap_value` | `is_plus` | Effective |
//! |-------|------------------|-----------|-----------|
//! | `"10.5"` | 10.5 | false | 10.5 |
//! | `"+2"` | 2.0 | true | -2.0 |
//! | `"0"` | 0.0 | false | 0.0 |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PairingError, PairingResult};

/// Highest handicap index accepted.
pub const MAX_HANDICAP: f64 = 54.0;

/// Stable player identifier, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A registered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable identifier.
    pub id: PlayerId,
    /// Display name, "Last, First".
    pub name: String,
    /// Handicap magnitude (0.0..=54.0).
    pub handicap_value: f64,
    /// Whether the handicap is a plus handicap.
    pub is_plus: bool,
}

/// A parsed handicap entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handicap {
    pub value: f64,
    pub is_plus: bool,
}

impl Handicap {
    /// Parses handicap text such as `"12.4"`, `"0"` or `"+1.5"`.
    pub fn parse(text: &str) -> PairingResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PairingError::validation("Handicap is required"));
        }

        let (is_plus, digits) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let value: f64 = digits.parse().map_err(|_| {
            PairingError::validation(format!("Handicap '{trimmed}' is not a number"))
        })?;

        if !value.is_finite() {
            return Err(PairingError::validation(format!(
                "Handicap '{trimmed}' is not a number"
            )));
        }
        if value < 0.0 {
            return Err(PairingError::validation(
                "Negative handicaps must be entered with a '+' sign",
            ));
        }
        if value > MAX_HANDICAP {
            return Err(PairingError::validation(format!(
                "Handicap cannot exceed {MAX_HANDICAP:.1}"
            )));
        }

        Ok(Self { value, is_plus })
    }

    /// Signed value used for ranking: plus handicaps are negative.
    #[inline]
    pub fn effective(&self) -> f64 {
        if self.is_plus {
            -self.value
        } else {
            self.value
        }
    }
}

/// Validates and normalizes a "Last, First" player name.
pub fn validate_name(name: &str) -> PairingResult<String> {
    let trimmed = name.trim();
    match trimmed.split_once(',') {
        Some((last, first)) if !last.trim().is_empty() && !first.trim().is_empty() => {
            Ok(format!("{}, {}", last.trim(), first.trim()))
        }
        _ => Err(PairingError::validation(format!(
            "Name '{trimmed}' must be entered as \"Last, First\""
        ))),
    }
}

impl Player {
    /// Creates a player from already-validated parts.
    pub fn new(id: PlayerId, name: impl Into<String>, handicap: Handicap) -> Self {
        Self {
            id,
            name: name.into(),
            handicap_value: handicap.value,
            is_plus: handicap.is_plus,
        }
    }

    /// Validates raw name and handicap text and builds a player.
    pub fn parse(id: PlayerId, name: &str, handicap_text: &str) -> PairingResult<Self> {
        let name = validate_name(name)?;
        let handicap = Handicap::parse(handicap_text)?;
        Ok(Self::new(id, name, handicap))
    }

    /// The stored handicap entry.
    pub fn handicap(&self) -> Handicap {
        Handicap {
            value: self.handicap_value,
            is_plus: self.is_plus,
        }
    }

    /// Signed handicap; lower is better.
    #[inline]
    pub fn effective_handicap(&self) -> f64 {
        self.handicap().effective()
    }

    /// Handicap as entered, e.g. `"+2.0"` or `"10.5"`.
    pub fn handicap_display(&self) -> String {
        if self.is_plus {
            format!("+{:.1}", self.handicap_value)
        } else {
            format!("{:.1}", self.handicap_value)
        }
    }
}
