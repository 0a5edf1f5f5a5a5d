//! The whole persisted tournament state.

use serde::{Deserialize, Serialize};

use super::{Groups, HoleAssignments, Player, PlayerId, Settings, Team};

/// Everything that is saved and restored as one blob.
///
/// Serializes as `{ players, groups, teams, holeAssignments, settings }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairingState {
    /// Registered players, in entry order.
    pub players: Vec<Player>,
    /// Live quartile groups.
    pub groups: Groups,
    /// Complete teams.
    pub teams: Vec<Team>,
    /// Starting-hole assignments.
    pub hole_assignments: HoleAssignments,
    /// Tournament settings.
    pub settings: Settings,
}

impl PairingState {
    /// Creates an empty state with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// One past the largest player id referenced anywhere in the state.
    pub fn next_player_id(&self) -> PlayerId {
        let in_players = self.players.iter().map(|p| p.id.0);
        let in_groups = self.groups.iter().map(|(_, p)| p.id.0);
        let in_teams = self
            .teams
            .iter()
            .flat_map(|t| t.members.iter().map(|p| p.id.0));

        let max = in_players.chain(in_groups).chain(in_teams).max().unwrap_or(0);
        PlayerId(max + 1)
    }

    /// Ids of all teams in registry order.
    pub fn team_ids(&self) -> Vec<super::TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Handicap, Team, TeamId};

    #[test]
    fn test_next_player_id_scans_teams() {
        let mut state = PairingState::new();
        assert_eq!(state.next_player_id(), PlayerId(1));

        let p = |id| {
            Player::new(
                PlayerId(id),
                "A, B",
                Handicap {
                    value: 1.0,
                    is_plus: false,
                },
            )
        };
        state.players.push(p(3));
        state
            .teams
            .push(Team::new(TeamId(1), [p(9), p(4), p(5), p(6)]));
        assert_eq!(state.next_player_id(), PlayerId(10));
    }

    #[test]
    fn test_json_top_level_keys() {
        let json = serde_json::to_value(PairingState::new()).unwrap();
        for key in ["players", "groups", "teams", "holeAssignments", "settings"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
