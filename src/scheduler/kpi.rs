//! Pairing quality metrics (KPIs).
//!
//! Summarizes how even the teams are and how much of the course is used.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Total | Mean of team total handicaps |
//! | Spread | max(total) - min(total) |
//! | Within Tolerance | spread ≤ `max_handicap_diff` |
//! | Deviation | total - average, per team |
//! | Assigned | Teams with a starting hole |
//! | Open Slots | Starting slots left on the course |
//! | Slot Utilization | assigned / total slots |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{total_capacity, HoleAssignments, Settings, Team, TeamId};

/// Pairing performance indicators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingKpi {
    /// Number of complete teams.
    pub team_count: usize,
    /// Mean team total handicap.
    pub avg_team_handicap: f64,
    /// Lowest team total.
    pub min_team_handicap: f64,
    /// Highest team total.
    pub max_team_handicap: f64,
    /// Highest minus lowest team total.
    pub handicap_spread: f64,
    /// Whether the spread is inside the configured tolerance.
    pub within_tolerance: bool,
    /// Per-team deviation from the mean total.
    pub deviation_by_team: BTreeMap<TeamId, f64>,
    /// Teams with a starting hole.
    pub assigned_teams: usize,
    /// Starting slots still free.
    pub open_slots: usize,
    /// Fraction of starting slots in use (0.0..1.0).
    pub slot_utilization: f64,
}

impl PairingKpi {
    /// Computes KPIs from the current teams and assignments.
    ///
    /// # Arguments
    /// * `teams` - Complete teams.
    /// * `assignments` - Current starting holes.
    /// * `settings` - For the handicap tolerance.
    pub fn calculate(teams: &[Team], assignments: &HoleAssignments, settings: &Settings) -> Self {
        let team_count = teams.len();

        let (avg, min, max) = if team_count == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let sum: f64 = teams.iter().map(|t| t.total_handicap).sum();
            let min = teams
                .iter()
                .map(|t| t.total_handicap)
                .fold(f64::INFINITY, f64::min);
            let max = teams
                .iter()
                .map(|t| t.total_handicap)
                .fold(f64::NEG_INFINITY, f64::max);
            (sum / team_count as f64, min, max)
        };

        let deviation_by_team = teams
            .iter()
            .map(|t| (t.id, t.total_handicap - avg))
            .collect();

        let spread = max - min;
        let capacity = total_capacity();
        let assigned_teams = assignments.assigned_count();

        Self {
            team_count,
            avg_team_handicap: avg,
            min_team_handicap: min,
            max_team_handicap: max,
            handicap_spread: spread,
            within_tolerance: spread <= settings.max_handicap_diff,
            deviation_by_team,
            assigned_teams,
            open_slots: capacity.saturating_sub(assigned_teams),
            slot_utilization: assigned_teams as f64 / capacity as f64,
        }
    }

    /// Teams whose total is further from the mean than the tolerance.
    pub fn outliers(&self, settings: &Settings) -> Vec<TeamId> {
        self.deviation_by_team
            .iter()
            .filter(|(_, dev)| dev.abs() > settings.max_handicap_diff)
            .map(|(&id, _)| id)
            .collect()
    }
}
