//! Hole assignment, tee sheet projection and pairing KPIs.
//!
//! # Algorithm
//!
//! Automatic assignment is a greedy two-pass fill: one team per hole, then
//! a second team on each double-stacked hole. It is not optimal, only
//! deterministic for a given team order.
//!
//! # KPI
//!
//! `PairingKpi` reports team handicap balance against the configured
//! tolerance and starting-slot usage.

mod assign;
mod kpi;
mod tee_times;

pub use assign::{assign_in_order, assign_shuffled};
pub use kpi::PairingKpi;
pub use tee_times::{tee_sheet, TeeTimeRow};
