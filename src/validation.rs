//! Integrity checks for loaded pairing state.
//!
//! Commands keep the state consistent on their own; these checks guard
//! state that arrives from storage. Detects:
//! - Duplicate player or team IDs
//! - Hole numbers off the course
//! - Holes holding more teams than their capacity
//! - A team assigned to more than one hole
//! - Holes referencing unknown teams
//! - Team totals that disagree with their members

use std::collections::{HashMap, HashSet};

use crate::models::{hole_capacity, is_valid_hole, PairingState, TeamId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A hole number outside 1..=18.
    InvalidHole,
    /// A hole holds more teams than it can start.
    OverCapacity,
    /// A team appears on more than one hole.
    DuplicateAssignment,
    /// A hole references a team that doesn't exist.
    UnknownTeam,
    /// A team's stored total doesn't match its members.
    TotalMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a pairing state.
///
/// Checks:
/// 1. No duplicate player IDs in the registry
/// 2. No player in more than one group
/// 3. No duplicate team IDs
/// 4. Team totals match their members
/// 5. Hole numbers are on the course
/// 6. No hole over capacity
/// 7. Each team on at most one hole
/// 8. Every assigned team exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_state(state: &PairingState) -> ValidationResult {
    let mut errors = Vec::new();

    let mut player_ids = HashSet::new();
    for p in &state.players {
        if !player_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate player ID: {}", p.id),
            ));
        }
    }

    let mut grouped_ids = HashSet::new();
    for (group, p) in state.groups.iter() {
        if !grouped_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Player {} appears again in group {group}", p.id),
            ));
        }
    }

    let mut team_ids = HashSet::new();
    for team in &state.teams {
        if !team_ids.insert(team.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id.0),
            ));
        }
        if (team.computed_total() - team.total_handicap).abs() > 1e-6 {
            errors.push(ValidationError::new(
                ValidationErrorKind::TotalMismatch,
                format!(
                    "{} total {:.1} does not match its members ({:.1})",
                    team.id,
                    team.total_handicap,
                    team.computed_total()
                ),
            ));
        }
    }

    let mut first_hole: HashMap<TeamId, u8> = HashMap::new();
    for (hole, teams) in state.hole_assignments.iter() {
        if !is_valid_hole(hole) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHole,
                format!("Hole {hole} is not on the course"),
            ));
            continue;
        }
        if teams.len() > hole_capacity(hole) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverCapacity,
                format!(
                    "Hole {hole} holds {} teams (max {})",
                    teams.len(),
                    hole_capacity(hole)
                ),
            ));
        }
        for &team_id in teams {
            if !team_ids.contains(&team_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeam,
                    format!("Hole {hole} references unknown team {}", team_id.0),
                ));
            }
            if let Some(previous) = first_hole.insert(team_id, hole) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAssignment,
                    format!("{team_id} is assigned to holes {previous} and {hole}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Groups, Handicap, Player, PlayerId, Team};

    fn player(id: u32) -> Player {
        Player::new(
            PlayerId(id),
            format!("P, {id}"),
            Handicap {
                value: id as f64,
                is_plus: false,
            },
        )
    }

    fn team(id: u32) -> Team {
        let base = id * 10;
        Team::new(
            TeamId(id),
            [player(base), player(base + 1), player(base + 2), player(base + 3)],
        )
    }

    fn from_json(json: &str) -> PairingState {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_state() {
        let mut state = PairingState::new();
        state.players = vec![player(1), player(2)];
        state.teams = vec![team(1), team(2)];
        state.hole_assignments.assign(TeamId(1), 3).unwrap();
        state.hole_assignments.assign(TeamId(2), 3).unwrap();
        assert!(validate_state(&state).is_ok());
    }

    #[test]
    fn test_duplicate_player_id() {
        let mut state = PairingState::new();
        state.players = vec![player(1), player(1)];
        let errors = validate_state(&state).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_player_in_two_groups() {
        let mut state = PairingState::new();
        state.groups = Groups::from_parts([vec![player(1)], vec![player(1)], vec![], vec![]]);
        let errors = validate_state(&state).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("group B")));
    }

    #[test]
    fn test_total_mismatch() {
        let mut state = PairingState::new();
        let mut t = team(1);
        t.total_handicap += 3.0;
        state.teams = vec![t];
        let errors = validate_state(&state).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TotalMismatch));
    }

    #[test]
    fn test_corrupt_hole_assignments() {
        // Hole 1 over capacity, hole 19 off course, team 1 twice, team 9 unknown.
        let mut state = from_json(r#"{"holeAssignments":{"1":[1,2],"5":[1],"19":[2],"7":[9]}}"#);
        state.teams = vec![team(1), team(2)];

        let errors = validate_state(&state).unwrap_err();
        let kinds: Vec<&ValidationErrorKind> = errors.iter().map(|e| &e.kind).collect();
        assert!(kinds.contains(&&ValidationErrorKind::OverCapacity));
        assert!(kinds.contains(&&ValidationErrorKind::InvalidHole));
        assert!(kinds.contains(&&ValidationErrorKind::DuplicateAssignment));
        assert!(kinds.contains(&&ValidationErrorKind::UnknownTeam));
    }

    #[test]
    fn test_empty_state_is_valid() {
        assert!(validate_state(&PairingState::new()).is_ok());
    }
}
