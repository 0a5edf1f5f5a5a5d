//! Interactive balanced draft.
//!
//! The draft fills `num_teams` teams one slot at a time. Rounds run
//! D → C → B → A; within a round, teams pick in index order. Each
//! call to [`DraftState::make_pick`] places exactly one player.
//!
//! # Pick Rule
//! - Balancing off, or round D: uniform random from the round's pool.
//! - Otherwise pick the candidate minimizing
//!   `|partial + candidate + remaining_rounds * avg_player - target|`,
//!   where `remaining_rounds` counts the rounds after the current one.
//!   Ties keep the first candidate in pool order.
//!
//! # Target
//! `target = avg_player * 4`, except that when teams already exist the
//! mean of their totals is used instead so later drafts line up with
//! earlier teams. This means the target can move between drafts in one
//! session.
//!
//! Pools are private copies of the live groups taken at start; live
//! groups change only at [`DraftState::finalize`].

use rand::Rng;
use serde::Serialize;

use crate::error::{PairingError, PairingResult};
use crate::models::{next_team_id, GroupId, Groups, Player, Settings, Team, TeamId};

/// Number of rounds (one per group).
pub const ROUNDS: usize = GroupId::DRAFT_ORDER.len();

/// One placed player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    /// Index of the drafting team (0-based).
    pub team_index: usize,
    /// Group the player was drawn from.
    pub group: GroupId,
    /// The drafted player.
    pub player: Player,
    /// Predicted final team total, for balanced picks.
    pub predicted_total: Option<f64>,
}

/// Transient state of an in-progress draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    num_teams: usize,
    slots: Vec<[Option<Player>; 4]>,
    pools: [Vec<Player>; 4],
    balanced: bool,
    avg_player_handicap: f64,
    target_team_handicap: f64,
    round: usize,
    team_cursor: usize,
}

impl DraftState {
    /// Starts a draft over snapshots of the live groups.
    ///
    /// # Arguments
    /// * `groups` - Live groups; copied, not modified.
    /// * `players` - Full registry, for the average player handicap.
    /// * `teams` - Existing teams; their mean total overrides the target.
    /// * `settings` - Whether balancing is enabled.
    ///
    /// # Errors
    /// `InsufficientPlayers` if any group is empty.
    pub fn start(
        groups: &Groups,
        players: &[Player],
        teams: &[Team],
        settings: &Settings,
    ) -> PairingResult<Self> {
        let num_teams = groups.min_len();
        if num_teams == 0 {
            return Err(PairingError::insufficient_players(
                "Every group needs at least one player to start a draft",
            ));
        }

        let pools: [Vec<Player>; 4] =
            std::array::from_fn(|i| groups.get(GroupId::ALL[i]).to_vec());

        let (avg_player_handicap, target_team_handicap) = if settings.balance_teams {
            let avg = mean(players.iter().map(Player::effective_handicap))
                .or_else(|| mean(groups.iter().map(|(_, p)| p.effective_handicap())))
                .unwrap_or(0.0);
            let target = mean(teams.iter().map(|t| t.total_handicap)).unwrap_or(avg * 4.0);
            (avg, target)
        } else {
            (0.0, 0.0)
        };

        log::info!(
            "draft started: {num_teams} team(s), balanced={} target={target_team_handicap:.2}",
            settings.balance_teams
        );

        Ok(Self {
            num_teams,
            slots: vec![Default::default(); num_teams],
            pools,
            balanced: settings.balance_teams,
            avg_player_handicap,
            target_team_handicap,
            round: 0,
            team_cursor: 0,
        })
    }

    /// Number of teams being drafted.
    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    /// Whether the balanced pick rule is in use.
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Mean effective handicap used for predictions.
    pub fn avg_player_handicap(&self) -> f64 {
        self.avg_player_handicap
    }

    /// Team total the balanced rule aims for.
    pub fn target_team_handicap(&self) -> f64 {
        self.target_team_handicap
    }

    /// Group being drafted, or `None` once complete.
    pub fn current_round(&self) -> Option<GroupId> {
        GroupId::DRAFT_ORDER.get(self.round).copied()
    }

    /// Team that picks next, or `None` once complete.
    pub fn current_team(&self) -> Option<usize> {
        (!self.is_complete()).then_some(self.team_cursor)
    }

    /// Whether every round has been drafted.
    pub fn is_complete(&self) -> bool {
        self.round >= ROUNDS
    }

    /// Picks made so far.
    pub fn picks_made(&self) -> usize {
        self.round.min(ROUNDS) * self.num_teams + self.team_cursor
    }

    /// Picks left until completion.
    pub fn picks_remaining(&self) -> usize {
        ROUNDS * self.num_teams - self.picks_made()
    }

    /// Slots of a drafted team, in group order A..D.
    pub fn team_slots(&self, team_index: usize) -> Option<&[Option<Player>; 4]> {
        self.slots.get(team_index)
    }

    /// Remaining pool of a group.
    pub fn pool(&self, group: GroupId) -> &[Player] {
        &self.pools[group.index()]
    }

    /// Sum of effective handicaps already on a team.
    pub fn partial_handicap(&self, team_index: usize) -> f64 {
        self.slots
            .get(team_index)
            .map(|slots| slots.iter().flatten().map(Player::effective_handicap).sum())
            .unwrap_or(0.0)
    }

    /// Places the next player.
    ///
    /// # Errors
    /// - `State` if the draft is already complete.
    /// - `NotFound` if the current round's pool is exhausted.
    pub fn make_pick<R: Rng>(&mut self, rng: &mut R) -> PairingResult<DraftPick> {
        let group = self
            .current_round()
            .ok_or_else(|| PairingError::state("The draft is already complete"))?;
        let team_index = self.team_cursor;
        let pool = &self.pools[group.index()];

        if pool.is_empty() {
            return Err(PairingError::not_found(format!(
                "Group {group} has no players left in the draft pool"
            )));
        }

        let (pick_index, predicted_total) = if self.balanced && group != GroupId::D {
            match self.best_balanced_candidate(group, team_index) {
                Some((idx, predicted)) => (idx, Some(predicted)),
                None => (rng.random_range(0..pool.len()), None),
            }
        } else {
            (rng.random_range(0..pool.len()), None)
        };

        let player = self.pools[group.index()].remove(pick_index);
        self.slots[team_index][group.index()] = Some(player.clone());
        self.advance();

        log::debug!(
            "draft round {group}: team {} takes {} ({})",
            team_index + 1,
            player.name,
            player.handicap_display()
        );

        Ok(DraftPick {
            team_index,
            group,
            player,
            predicted_total,
        })
    }

    /// Candidate index and predicted total closest to the target.
    fn best_balanced_candidate(&self, group: GroupId, team_index: usize) -> Option<(usize, f64)> {
        let partial = self.partial_handicap(team_index);
        let remaining_rounds = (ROUNDS - 1 - self.round) as f64;

        let mut best: Option<(usize, f64, f64)> = None;
        for (idx, candidate) in self.pools[group.index()].iter().enumerate() {
            let predicted = partial
                + candidate.effective_handicap()
                + remaining_rounds * self.avg_player_handicap;
            let diff = (predicted - self.target_team_handicap).abs();
            if best.map_or(true, |(_, best_diff, _)| diff < best_diff) {
                best = Some((idx, diff, predicted));
            }
        }
        best.map(|(idx, _, predicted)| (idx, predicted))
    }

    fn advance(&mut self) {
        self.team_cursor += 1;
        if self.team_cursor >= self.num_teams {
            self.team_cursor = 0;
            self.round += 1;
        }
    }

    /// Builds the drafted teams and removes their members from `groups`.
    ///
    /// Team ids continue from the largest id in `existing`. Nothing is
    /// modified on error.
    ///
    /// # Errors
    /// - `State` if rounds remain.
    /// - `State` if a drafted team has an empty slot (internal defect).
    pub fn finalize(&self, groups: &mut Groups, existing: &[Team]) -> PairingResult<Vec<Team>> {
        if !self.is_complete() {
            return Err(PairingError::state(format!(
                "The draft is not complete: {} pick(s) remaining",
                self.picks_remaining()
            )));
        }

        let first_id = next_team_id(existing).0;
        let mut teams = Vec::with_capacity(self.num_teams);
        for (i, slots) in self.slots.iter().enumerate() {
            let members = complete_members(slots).ok_or_else(|| {
                log::error!("drafted team {} is missing a player after the final round", i + 1);
                PairingError::state(format!("Drafted team {} is incomplete", i + 1))
            })?;
            teams.push(Team::new(TeamId(first_id + i as u32), members));
        }

        for team in &teams {
            for group in GroupId::ALL {
                let member = team.member(group);
                if groups.remove_player(group, member.id).is_none() {
                    log::warn!(
                        "{} ({}) was no longer in group {group} at finalize",
                        member.name,
                        member.id
                    );
                }
            }
        }

        log::info!("draft finalized: {} team(s) committed", teams.len());
        Ok(teams)
    }
}

fn complete_members(slots: &[Option<Player>; 4]) -> Option<[Player; 4]> {
    let [a, b, c, d] = slots;
    Some([a.clone()?, b.clone()?, c.clone()?, d.clone()?])
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
