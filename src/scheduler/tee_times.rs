//! Tee sheet projection.
//!
//! Tee times are derived on demand from the hole assignments and the
//! settings; they are never stored.
//!
//! | Format | Time of k-th visited slot | Row order |
//! |--------|---------------------------|-----------|
//! | Sequential | `start + k * interval` | elapsed time, then hole |
//! | Shotgun | `start` | hole |
//!
//! Slots are visited hole 1 → 18, then in each hole's list order.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use crate::models::{HoleAssignments, Settings, StartFormat, TeamId};

/// One line of the tee sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeRow {
    /// Starting hole.
    pub hole: u8,
    /// Position on the hole (0 = first group off).
    pub slot: usize,
    /// Team starting here.
    pub team_id: TeamId,
    /// Tee time.
    #[serde(serialize_with = "serialize_hhmm")]
    pub tee_time: NaiveTime,
    /// Start label: `"3A"`/`"3B"` on a shared hole, otherwise `"3"`.
    pub label: String,
}

/// Builds the tee sheet for the current assignments.
pub fn tee_sheet(assignments: &HoleAssignments, settings: &Settings) -> Vec<TeeTimeRow> {
    let interval = Duration::minutes(i64::from(settings.time_interval));

    let mut keyed = Vec::with_capacity(assignments.assigned_count());
    let mut visited: i32 = 0;
    for (hole, teams) in assignments.iter() {
        for (slot, &team_id) in teams.iter().enumerate() {
            // Minutes after the start; keeps growing past midnight.
            let offset = match settings.start_format {
                StartFormat::Sequential => interval * visited,
                StartFormat::Shotgun => Duration::zero(),
            };
            let (tee_time, _) = settings.start_time.overflowing_add_signed(offset);
            keyed.push((
                offset,
                TeeTimeRow {
                    hole,
                    slot,
                    team_id,
                    tee_time,
                    label: start_label(hole, slot, teams.len()),
                },
            ));
            visited += 1;
        }
    }

    // Stable sort keeps slot order for equal keys.
    match settings.start_format {
        StartFormat::Sequential => keyed.sort_by_key(|(offset, r)| (*offset, r.hole)),
        StartFormat::Shotgun => keyed.sort_by_key(|(_, r)| r.hole),
    }
    keyed.into_iter().map(|(_, row)| row).collect()
}

fn start_label(hole: u8, slot: usize, teams_on_hole: usize) -> String {
    if teams_on_hole > 1 {
        let suffix = if slot == 0 { 'A' } else { 'B' };
        format!("{hole}{suffix}")
    } else {
        hole.to_string()
    }
}

fn serialize_hhmm<S: serde::Serializer>(
    time: &NaiveTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}
