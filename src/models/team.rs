//! Team model: one player from each quartile group.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GroupId, Player};

/// Team identifier (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// A complete four-player team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team identifier.
    pub id: TeamId,
    /// Members in group order A, B, C, D.
    pub members: [Player; 4],
    /// Sum of members' effective handicaps.
    pub total_handicap: f64,
}

impl Team {
    /// Creates a team and computes its total handicap.
    pub fn new(id: TeamId, members: [Player; 4]) -> Self {
        let total_handicap = members.iter().map(Player::effective_handicap).sum();
        Self {
            id,
            members,
            total_handicap,
        }
    }

    /// Member drawn from a given group.
    pub fn member(&self, group: GroupId) -> &Player {
        &self.members[group.index()]
    }

    /// Average effective handicap per member.
    pub fn average_handicap(&self) -> f64 {
        self.total_handicap / self.members.len() as f64
    }

    /// Recomputes the total from the members.
    pub fn computed_total(&self) -> f64 {
        self.members.iter().map(Player::effective_handicap).sum()
    }
}

/// Next free team id: one past the current maximum.
pub fn next_team_id(teams: &[Team]) -> TeamId {
    TeamId(teams.iter().map(|t| t.id.0).max().unwrap_or(0) + 1)
}
