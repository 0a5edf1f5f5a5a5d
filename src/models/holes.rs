//! Starting-hole assignments.
//!
//! Each of the 18 holes can start one team, except the double-stacked
//! holes which start two (an "A" and a "B" group).
//!
//! # Invariants
//! - Hole numbers are in `1..=18`.
//! - A team id appears on at most one hole.
//! - A hole never holds more ids than its capacity.
//! - Empty holes have no entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TeamId;
use crate::error::{PairingError, PairingResult};

/// Number of starting holes on the course.
pub const HOLE_COUNT: u8 = 18;

/// Holes that can start two teams.
pub const DOUBLE_STACKED_HOLES: [u8; 10] = [3, 4, 6, 7, 8, 10, 12, 13, 16, 18];

/// Whether a hole number is on the course.
#[inline]
pub fn is_valid_hole(hole: u8) -> bool {
    (1..=HOLE_COUNT).contains(&hole)
}

/// Whether a hole is double-stacked.
#[inline]
pub fn is_double_stacked(hole: u8) -> bool {
    DOUBLE_STACKED_HOLES.contains(&hole)
}

/// Maximum number of teams a hole can start.
#[inline]
pub fn hole_capacity(hole: u8) -> usize {
    if is_double_stacked(hole) {
        2
    } else {
        1
    }
}

/// Total starting slots on the course.
pub fn total_capacity() -> usize {
    (1..=HOLE_COUNT).map(hole_capacity).sum()
}

/// Hole number → ordered team ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoleAssignments {
    holes: BTreeMap<u8, Vec<TeamId>>,
}

impl HoleAssignments {
    /// Creates an empty assignment map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Teams starting on a hole, in slot order.
    pub fn teams_on(&self, hole: u8) -> &[TeamId] {
        self.holes.get(&hole).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The hole a team starts on, if any.
    pub fn hole_of(&self, team_id: TeamId) -> Option<u8> {
        self.holes
            .iter()
            .find(|(_, teams)| teams.contains(&team_id))
            .map(|(&hole, _)| hole)
    }

    /// Whether a team has a starting hole.
    pub fn is_assigned(&self, team_id: TeamId) -> bool {
        self.hole_of(team_id).is_some()
    }

    /// Remaining slots on a hole.
    pub fn free_slots(&self, hole: u8) -> usize {
        hole_capacity(hole).saturating_sub(self.teams_on(hole).len())
    }

    /// Number of assigned teams.
    pub fn assigned_count(&self) -> usize {
        self.holes.values().map(Vec::len).sum()
    }

    /// Whether no team is assigned.
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Iterates non-empty holes in hole order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[TeamId])> {
        self.holes.iter().map(|(&hole, teams)| (hole, teams.as_slice()))
    }

    /// Adds a team to a hole.
    ///
    /// Fails if the hole is off the course, the team already has a hole,
    /// or the hole is at capacity. Nothing changes on failure.
    pub fn assign(&mut self, team_id: TeamId, hole: u8) -> PairingResult<()> {
        if !is_valid_hole(hole) {
            return Err(PairingError::validation(format!(
                "Hole {hole} is not between 1 and {HOLE_COUNT}"
            )));
        }
        if let Some(current) = self.hole_of(team_id) {
            return Err(PairingError::capacity(format!(
                "{team_id} is already assigned to hole {current}"
            )));
        }
        if self.free_slots(hole) == 0 {
            return Err(PairingError::capacity(format!(
                "Hole {hole} is full ({} team(s) max)",
                hole_capacity(hole)
            )));
        }

        self.holes.entry(hole).or_default().push(team_id);
        Ok(())
    }

    /// Removes a team from a hole, dropping the hole entry once empty.
    pub fn remove(&mut self, team_id: TeamId, hole: u8) -> PairingResult<()> {
        let teams = self.holes.get_mut(&hole).ok_or_else(|| {
            PairingError::not_found(format!("{team_id} is not assigned to hole {hole}"))
        })?;
        let pos = teams.iter().position(|&t| t == team_id).ok_or_else(|| {
            PairingError::not_found(format!("{team_id} is not assigned to hole {hole}"))
        })?;

        teams.remove(pos);
        if teams.is_empty() {
            self.holes.remove(&hole);
        }
        Ok(())
    }

    /// Removes every assignment.
    pub fn clear(&mut self) {
        self.holes.clear();
    }

    /// Drops every reference to a team. Returns the hole it was on.
    pub fn unassign(&mut self, team_id: TeamId) -> Option<u8> {
        let hole = self.hole_of(team_id)?;
        self.remove(team_id, hole).ok()?;
        Some(hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities() {
        assert_eq!(hole_capacity(1), 1);
        assert_eq!(hole_capacity(3), 2);
        assert_eq!(hole_capacity(18), 2);
        assert_eq!(total_capacity(), 28);
    }

    #[test]
    fn test_double_stacked_hole_takes_two() {
        let mut h = HoleAssignments::new();
        h.assign(TeamId(1), 3).unwrap();
        h.assign(TeamId(2), 3).unwrap();
        let err = h.assign(TeamId(3), 3).unwrap_err();
        assert!(matches!(err, PairingError::Capacity(_)));
        assert_eq!(h.teams_on(3), &[TeamId(1), TeamId(2)]);
    }

    #[test]
    fn test_single_hole_takes_one() {
        let mut h = HoleAssignments::new();
        h.assign(TeamId(1), 1).unwrap();
        assert!(matches!(
            h.assign(TeamId(2), 1),
            Err(PairingError::Capacity(_))
        ));
    }

    #[test]
    fn test_team_occupies_one_hole() {
        let mut h = HoleAssignments::new();
        h.assign(TeamId(1), 1).unwrap();
        assert!(matches!(
            h.assign(TeamId(1), 2),
            Err(PairingError::Capacity(_))
        ));
        assert_eq!(h.hole_of(TeamId(1)), Some(1));
    }

    #[test]
    fn test_invalid_hole() {
        let mut h = HoleAssignments::new();
        assert!(matches!(
            h.assign(TeamId(1), 0),
            Err(PairingError::Validation(_))
        ));
        assert!(matches!(
            h.assign(TeamId(1), 19),
            Err(PairingError::Validation(_))
        ));
        assert!(h.is_empty());
    }

    #[test]
    fn test_remove_drops_empty_entry() {
        let mut h = HoleAssignments::new();
        h.assign(TeamId(1), 4).unwrap();
        h.assign(TeamId(2), 4).unwrap();

        h.remove(TeamId(1), 4).unwrap();
        assert_eq!(h.teams_on(4), &[TeamId(2)]);

        h.remove(TeamId(2), 4).unwrap();
        assert!(h.is_empty());
        assert!(h.hole_of(TeamId(2)).is_none());
    }

    #[test]
    fn test_remove_wrong_hole() {
        let mut h = HoleAssignments::new();
        h.assign(TeamId(1), 4).unwrap();
        assert!(matches!(
            h.remove(TeamId(1), 5),
            Err(PairingError::NotFound(_))
        ));
        assert!(matches!(
            h.remove(TeamId(2), 4),
            Err(PairingError::NotFound(_))
        ));
        assert_eq!(h.assigned_count(), 1);
    }

    #[test]
    fn test_json_uses_hole_keys() {
        let mut h = HoleAssignments::new();
        h.assign(TeamId(5), 3).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"3":[5]}"#);

        let back: HoleAssignments = serde_json::from_str(&json).unwrap();
        assert_eq!(back.teams_on(3), &[TeamId(5)]);
    }
}
