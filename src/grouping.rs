//! Quartile partitioning of the player registry.
//!
//! # Algorithm
//! 1. Stable-sort players by effective handicap ascending (ties keep
//!    registration order).
//! 2. Slice into four contiguous chunks of `ceil(n / 4)` players.
//!    Group A gets the lowest handicaps; trailing groups may be short.
//!
//! # Example
//!
//! ```
//! use golf_pairings::grouping::partition;
//! use golf_pairings::models::{GroupId, Player, PlayerId};
//!
//! let players = vec![
//!     Player::parse(PlayerId(1), "Smith, John", "10.5").unwrap(),
//!     Player::parse(PlayerId(2), "Doe, Jane", "5").unwrap(),
//!     Player::parse(PlayerId(3), "Lee, Kim", "20").unwrap(),
//!     Player::parse(PlayerId(4), "Ng, Pat", "+2").unwrap(),
//! ];
//! let groups = partition(&players).unwrap();
//! assert_eq!(groups.get(GroupId::A)[0].name, "Ng, Pat");
//! assert_eq!(groups.get(GroupId::D)[0].name, "Lee, Kim");
//! ```

use crate::error::{PairingError, PairingResult};
use crate::models::{GroupId, Groups, Player};

/// Fewest players that can be grouped.
pub const MIN_PLAYERS: usize = 4;

/// Players per quartile for a registry of `total` players.
#[inline]
pub fn quartile_size(total: usize) -> usize {
    total.div_ceil(4)
}

/// Splits players into quartile groups A..D.
pub fn partition(players: &[Player]) -> PairingResult<Groups> {
    if players.len() < MIN_PLAYERS {
        return Err(PairingError::insufficient_players(format!(
            "At least {MIN_PLAYERS} players are needed to form groups ({} registered)",
            players.len()
        )));
    }

    let mut sorted: Vec<Player> = players.to_vec();
    sorted.sort_by(|a, b| a.effective_handicap().total_cmp(&b.effective_handicap()));

    let size = quartile_size(sorted.len());
    let mut chunks = sorted.chunks(size).map(<[Player]>::to_vec);
    let parts: [Vec<Player>; 4] = std::array::from_fn(|_| chunks.next().unwrap_or_default());

    let groups = Groups::from_parts(parts);
    log::debug!(
        "partitioned {} players: A={} B={} C={} D={}",
        players.len(),
        groups.len_of(GroupId::A),
        groups.len_of(GroupId::B),
        groups.len_of(GroupId::C),
        groups.len_of(GroupId::D)
    );
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    fn roster(handicaps: &[&str]) -> Vec<Player> {
        handicaps
            .iter()
            .enumerate()
            .map(|(i, h)| Player::parse(PlayerId(i as u32 + 1), &format!("P, {i}"), h).unwrap())
            .collect()
    }

    #[test]
    fn test_too_few_players() {
        let err = partition(&roster(&["1", "2", "3"])).unwrap_err();
        assert!(matches!(err, PairingError::InsufficientPlayers(_)));
    }

    #[test]
    fn test_four_players_one_each() {
        let players = vec![
            Player::parse(PlayerId(1), "Smith, John", "10.5").unwrap(),
            Player::parse(PlayerId(2), "Doe, Jane", "5.0").unwrap(),
            Player::parse(PlayerId(3), "Lee, Kim", "20.0").unwrap(),
            Player::parse(PlayerId(4), "Ng, Pat", "+2.0").unwrap(),
        ];
        let groups = partition(&players).unwrap();

        let names: Vec<&str> = GroupId::ALL
            .iter()
            .map(|&g| {
                assert_eq!(groups.len_of(g), 1);
                groups.get(g)[0].name.as_str()
            })
            .collect();
        assert_eq!(names, ["Ng, Pat", "Doe, Jane", "Smith, John", "Lee, Kim"]);
    }

    #[test]
    fn test_uneven_sizes() {
        // 10 players → quartile 3: A=3 B=3 C=3 D=1
        let players = roster(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        let groups = partition(&players).unwrap();
        assert_eq!(groups.len_of(GroupId::A), 3);
        assert_eq!(groups.len_of(GroupId::B), 3);
        assert_eq!(groups.len_of(GroupId::C), 3);
        assert_eq!(groups.len_of(GroupId::D), 1);
        assert_eq!(groups.total_len(), 10);
    }

    #[test]
    fn test_five_players_leaves_d_empty() {
        let groups = partition(&roster(&["1", "2", "3", "4", "5"])).unwrap();
        assert_eq!(groups.len_of(GroupId::D), 0);
        assert!(!groups.can_form_team());
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let players = roster(&["5", "5", "5", "5", "1", "9", "9", "9"]);
        let groups = partition(&players).unwrap();
        let a: Vec<u32> = groups.get(GroupId::A).iter().map(|p| p.id.0).collect();
        let b: Vec<u32> = groups.get(GroupId::B).iter().map(|p| p.id.0).collect();
        assert_eq!(a, [5, 1]);
        assert_eq!(b, [2, 3]);
    }

    #[test]
    fn test_quartile_size() {
        assert_eq!(quartile_size(4), 1);
        assert_eq!(quartile_size(5), 2);
        assert_eq!(quartile_size(16), 4);
        assert_eq!(quartile_size(17), 5);
    }
}
