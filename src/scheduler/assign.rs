//! Greedy two-pass hole assignment.
//!
//! # Algorithm
//! 1. Clear all assignments.
//! 2. Pass 1: holes 1..=18 each receive the next unassigned team.
//! 3. Pass 2: double-stacked holes, in hole order, receive a second team
//!    while teams remain.
//!
//! At most `min(teams, 28)` teams are placed. The result depends only on
//! the team order, so [`assign_shuffled`] randomizes by permuting the
//! order first.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{HoleAssignments, TeamId, DOUBLE_STACKED_HOLES, HOLE_COUNT};

/// Replaces `assignments` with a fill of `team_order`. Returns the count placed.
pub fn assign_in_order(assignments: &mut HoleAssignments, team_order: &[TeamId]) -> usize {
    assignments.clear();

    let mut queue = team_order.iter().copied();
    let mut placed = 0;

    let first_pass = 1..=HOLE_COUNT;
    let second_pass = DOUBLE_STACKED_HOLES.iter().copied();

    for hole in first_pass.chain(second_pass) {
        let Some(team_id) = queue.next() else {
            break;
        };
        if let Err(err) = assignments.assign(team_id, hole) {
            // Only duplicate ids in `team_order` can land here.
            log::warn!("skipping {team_id} on hole {hole}: {err}");
            continue;
        }
        placed += 1;
    }

    log::debug!("{placed} of {} team(s) placed on holes", team_order.len());
    placed
}

/// Shuffles `team_order` uniformly, then fills holes as [`assign_in_order`].
pub fn assign_shuffled<R: Rng>(
    assignments: &mut HoleAssignments,
    team_order: &[TeamId],
    rng: &mut R,
) -> usize {
    let mut shuffled = team_order.to_vec();
    shuffled.shuffle(rng);
    assign_in_order(assignments, &shuffled)
}
