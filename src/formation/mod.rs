//! Team formation strategies.
//!
//! Every strategy consumes players from the four live groups and produces
//! complete teams with one member per group.
//!
//! | Strategy | Entry point | Steps |
//! |----------|-------------|-------|
//! | Single random pick | [`pick_random_team`] | 1 team per call |
//! | Auto-select-all | [`pick_all_random_teams`] | until a group runs out |
//! | Balanced draft | [`DraftState`] | 1 player per call, then finalize |

mod draft;
mod random;

pub use draft::{DraftPick, DraftState, ROUNDS};
pub use random::{pick_all_random_teams, pick_random_team};
