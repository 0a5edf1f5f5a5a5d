//! Quartile groups A (lowest handicaps) through D.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Player, PlayerId};

/// One of the four handicap quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupId {
    A,
    B,
    C,
    D,
}

impl GroupId {
    /// All groups in team-slot order.
    pub const ALL: [GroupId; 4] = [GroupId::A, GroupId::B, GroupId::C, GroupId::D];

    /// Draft round order: weakest quartile first.
    pub const DRAFT_ORDER: [GroupId; 4] = [GroupId::D, GroupId::C, GroupId::B, GroupId::A];

    /// Slot index of this group inside a team (A=0 .. D=3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            GroupId::A => 0,
            GroupId::B => 1,
            GroupId::C => 2,
            GroupId::D => 3,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            GroupId::A => "A",
            GroupId::B => "B",
            GroupId::C => "C",
            GroupId::D => "D",
        };
        f.write_str(letter)
    }
}

/// The four live groups. Players leave a group when drafted onto a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Groups {
    #[serde(rename = "A", default)]
    a: Vec<Player>,
    #[serde(rename = "B", default)]
    b: Vec<Player>,
    #[serde(rename = "C", default)]
    c: Vec<Player>,
    #[serde(rename = "D", default)]
    d: Vec<Player>,
}

impl Groups {
    /// Creates empty groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds groups from four ordered lists (A, B, C, D).
    pub fn from_parts(parts: [Vec<Player>; 4]) -> Self {
        let [a, b, c, d] = parts;
        Self { a, b, c, d }
    }

    /// Players currently in a group.
    pub fn get(&self, group: GroupId) -> &[Player] {
        match group {
            GroupId::A => &self.a,
            GroupId::B => &self.b,
            GroupId::C => &self.c,
            GroupId::D => &self.d,
        }
    }

    pub(crate) fn get_mut(&mut self, group: GroupId) -> &mut Vec<Player> {
        match group {
            GroupId::A => &mut self.a,
            GroupId::B => &mut self.b,
            GroupId::C => &mut self.c,
            GroupId::D => &mut self.d,
        }
    }

    /// Size of a group.
    pub fn len_of(&self, group: GroupId) -> usize {
        self.get(group).len()
    }

    /// Total players across all groups.
    pub fn total_len(&self) -> usize {
        GroupId::ALL.iter().map(|&g| self.len_of(g)).sum()
    }

    /// Whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Smallest group size: the number of complete teams still formable.
    pub fn min_len(&self) -> usize {
        GroupId::ALL
            .iter()
            .map(|&g| self.len_of(g))
            .min()
            .unwrap_or(0)
    }

    /// Whether one player can still be taken from every group.
    pub fn can_form_team(&self) -> bool {
        self.min_len() > 0
    }

    /// Removes a player from a group by id. Returns the removed player.
    pub fn remove_player(&mut self, group: GroupId, id: PlayerId) -> Option<Player> {
        let members = self.get_mut(group);
        let pos = members.iter().position(|p| p.id == id)?;
        Some(members.remove(pos))
    }

    /// Removes a player from whichever group holds it.
    pub fn remove_anywhere(&mut self, id: PlayerId) -> Option<(GroupId, Player)> {
        GroupId::ALL
            .iter()
            .find_map(|&g| self.remove_player(g, id).map(|p| (g, p)))
    }

    /// Finds which group a player is in.
    pub fn group_of(&self, id: PlayerId) -> Option<GroupId> {
        GroupId::ALL
            .iter()
            .copied()
            .find(|&g| self.get(g).iter().any(|p| p.id == id))
    }

    /// Iterates every grouped player with its group.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &Player)> {
        GroupId::ALL
            .into_iter()
            .flat_map(move |g| self.get(g).iter().map(move |p| (g, p)))
    }

    /// Empties all groups.
    pub fn clear(&mut self) {
        for g in GroupId::ALL {
            self.get_mut(g).clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Handicap;

    fn player(id: u32, hcp: f64) -> Player {
        Player::new(
            PlayerId(id),
            format!("Player, {id}"),
            Handicap {
                value: hcp,
                is_plus: false,
            },
        )
    }

    #[test]
    fn test_can_form_team() {
        let mut groups = Groups::from_parts([
            vec![player(1, 1.0)],
            vec![player(2, 5.0)],
            vec![player(3, 10.0)],
            vec![player(4, 20.0)],
        ]);
        assert!(groups.can_form_team());
        assert_eq!(groups.total_len(), 4);

        groups.remove_player(GroupId::C, PlayerId(3)).unwrap();
        assert!(!groups.can_form_team());
        assert_eq!(groups.min_len(), 0);
    }

    #[test]
    fn test_remove_by_id() {
        let mut groups = Groups::from_parts([
            vec![player(1, 1.0), player(2, 2.0)],
            vec![],
            vec![],
            vec![],
        ]);
        assert_eq!(groups.group_of(PlayerId(2)), Some(GroupId::A));
        assert!(groups.remove_player(GroupId::B, PlayerId(2)).is_none());

        let (g, p) = groups.remove_anywhere(PlayerId(2)).unwrap();
        assert_eq!(g, GroupId::A);
        assert_eq!(p.id, PlayerId(2));
        assert_eq!(groups.len_of(GroupId::A), 1);
        assert!(groups.group_of(PlayerId(2)).is_none());
    }

    #[test]
    fn test_draft_order_and_index() {
        assert_eq!(GroupId::DRAFT_ORDER[0], GroupId::D);
        assert_eq!(GroupId::D.index(), 3);
        assert_eq!(GroupId::B.to_string(), "B");
    }

    #[test]
    fn test_groups_json_keys() {
        let groups = Groups::from_parts([vec![player(1, 1.0)], vec![], vec![], vec![]]);
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(json["A"].as_array().unwrap().len(), 1);
        assert!(json["D"].as_array().unwrap().is_empty());
    }
}
