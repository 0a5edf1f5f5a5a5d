//! Pairing domain models.
//!
//! Provides the data types shared by every pairing stage: registered
//! players, quartile groups, four-player teams, starting-hole
//! assignments and tournament settings.

mod group;
mod holes;
mod player;
mod settings;
mod state;
mod team;

pub use group::{GroupId, Groups};
pub use holes::{
    hole_capacity, is_double_stacked, is_valid_hole, total_capacity, HoleAssignments,
    DOUBLE_STACKED_HOLES, HOLE_COUNT,
};
pub use player::{validate_name, Handicap, Player, PlayerId, MAX_HANDICAP};
pub use settings::{Settings, StartFormat};
pub use state::PairingState;
pub use team::{next_team_id, Team, TeamId};
