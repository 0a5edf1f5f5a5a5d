//! Golf tournament pairing engine.
//!
//! Registers players, splits them into handicap quartile groups, forms
//! four-player teams and assigns teams to starting holes with a projected
//! tee sheet. Rendering, input handling and storage media belong to the
//! caller; this crate exposes a single [`session::PairingSession`] that
//! owns the state and answers queries and commands.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Player`, `Groups`, `Team`,
//!   `HoleAssignments`, `Settings`, `PairingState`
//! - **`grouping`**: Quartile partitioning by effective handicap
//! - **`formation`**: Random, auto-select-all and balanced-draft team building
//! - **`scheduler`**: Hole assignment, tee sheet and pairing KPIs
//! - **`import`**: CSV roster import
//! - **`validation`**: Integrity checks for loaded state
//! - **`store`**: Whole-state JSON persistence
//! - **`session`**: The controller a presentation layer drives
//! - **`outcome`**: Serializable `{ success, payload, message }` results
//!
//! # Pipeline
//!
//! players → `group_players` → A/B/C/D → teams → holes → tee sheet

pub mod error;
pub mod formation;
pub mod grouping;
pub mod import;
pub mod models;
pub mod outcome;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{ErrorKind, PairingError, PairingResult};
pub use session::PairingSession;
