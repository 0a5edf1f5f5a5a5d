//! Random team selection: one uniformly random player per group.

use rand::Rng;

use crate::error::{PairingError, PairingResult};
use crate::models::{next_team_id, GroupId, Groups, Player, Team};

/// Draws one random player from each group and builds a team.
///
/// The chosen players are removed from their groups. The team id is one
/// past the largest id in `teams`.
///
/// # Errors
/// `InsufficientPlayers` if any group is empty; groups are left untouched.
pub fn pick_random_team<R: Rng>(
    groups: &mut Groups,
    teams: &[Team],
    rng: &mut R,
) -> PairingResult<Team> {
    if let Some(empty) = GroupId::ALL.iter().find(|&&g| groups.len_of(g) == 0) {
        return Err(PairingError::insufficient_players(format!(
            "Group {empty} has no players left to form a team"
        )));
    }

    // Choose every index before removing anything.
    let picks: [usize; 4] =
        std::array::from_fn(|i| rng.random_range(0..groups.len_of(GroupId::ALL[i])));

    let members: [Player; 4] =
        std::array::from_fn(|i| groups.get_mut(GroupId::ALL[i]).remove(picks[i]));

    let team = Team::new(next_team_id(teams), members);
    log::debug!(
        "{} drawn at random (total handicap {:.1})",
        team.id,
        team.total_handicap
    );
    Ok(team)
}

/// Forms random teams until some group runs out.
///
/// Newly formed teams are appended to `teams`. Returns how many were formed.
///
/// # Errors
/// `InsufficientPlayers` if not even one team can be formed.
pub fn pick_all_random_teams<R: Rng>(
    groups: &mut Groups,
    teams: &mut Vec<Team>,
    rng: &mut R,
) -> PairingResult<usize> {
    if !groups.can_form_team() {
        return Err(PairingError::insufficient_players(
            "Every group needs at least one player to form a team",
        ));
    }

    let mut formed = 0;
    while groups.can_form_team() {
        let team = pick_random_team(groups, teams, rng)?;
        teams.push(team);
        formed += 1;
    }
    Ok(formed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::partition;
    use crate::models::PlayerId;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn groups_of(n: usize) -> Groups {
        let players: Vec<Player> = (0..n)
            .map(|i| {
                Player::parse(
                    PlayerId(i as u32 + 1),
                    &format!("P, {i}"),
                    &format!("{}", i * 2),
                )
                .unwrap()
            })
            .collect();
        partition(&players).unwrap()
    }

    #[test]
    fn test_random_team_takes_one_per_group() {
        let mut groups = groups_of(8);
        let mut rng = SmallRng::seed_from_u64(42);

        let team = pick_random_team(&mut groups, &[], &mut rng).unwrap();
        assert_eq!(team.id.0, 1);
        for g in GroupId::ALL {
            assert_eq!(groups.len_of(g), 1);
            // Member came from the right quartile and is gone from it.
            assert!(groups.group_of(team.member(g).id).is_none());
        }
        assert!((team.total_handicap - team.computed_total()).abs() < 1e-10);
    }

    #[test]
    fn test_random_team_ids_continue() {
        let mut groups = groups_of(8);
        let mut rng = SmallRng::seed_from_u64(7);
        let first = pick_random_team(&mut groups, &[], &mut rng).unwrap();
        let second = pick_random_team(&mut groups, &[first], &mut rng).unwrap();
        assert_eq!(second.id.0, 2);
    }

    #[test]
    fn test_empty_group_fails_without_mutation() {
        let mut groups = groups_of(5); // D is empty
        let before = groups.clone();
        let mut rng = SmallRng::seed_from_u64(1);
        let err = pick_random_team(&mut groups, &[], &mut rng).unwrap_err();
        assert!(matches!(err, PairingError::InsufficientPlayers(_)));
        assert_eq!(groups, before);
    }

    #[test]
    fn test_pick_all_until_exhausted() {
        let mut groups = groups_of(10); // 3,3,3,1
        let mut teams = Vec::new();
        let mut rng = SmallRng::seed_from_u64(3);

        let formed = pick_all_random_teams(&mut groups, &mut teams, &mut rng).unwrap();
        assert_eq!(formed, 1);
        assert_eq!(teams.len(), 1);
        assert_eq!(groups.total_len(), 6);
        assert!(pick_all_random_teams(&mut groups, &mut teams, &mut rng).is_err());
    }

    #[test]
    fn test_pick_all_sixteen() {
        let mut groups = groups_of(16);
        let mut teams = Vec::new();
        let mut rng = SmallRng::seed_from_u64(11);

        assert_eq!(
            pick_all_random_teams(&mut groups, &mut teams, &mut rng).unwrap(),
            4
        );
        assert!(groups.is_empty());
        let ids: Vec<u32> = teams.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }
}
