//! CSV bulk import of players.
//!
//! Each line is `LastName,FirstName,Handicap` with no header row. The
//! handicap may carry a leading `+`. Invalid lines are reported and
//! skipped; valid lines still import.

use serde::Serialize;

use crate::models::{Player, PlayerId};

/// A rejected CSV line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLineError {
    /// 1-based line number in the input.
    pub line: u64,
    /// The offending line, fields re-joined with commas.
    pub content: String,
    /// Why the line was rejected.
    pub message: String,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// Players built from valid lines, ids ascending from the first id.
    pub players: Vec<Player>,
    /// Rejected lines.
    pub errors: Vec<ImportLineError>,
}

impl ImportReport {
    /// Whether every non-blank line imported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses roster CSV text. Ids are assigned from `first_id` upward.
pub fn parse_roster(text: &str, first_id: PlayerId) -> ImportReport {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut report = ImportReport::default();
    let mut next_id = first_id.0;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                report.errors.push(ImportLineError {
                    line: err.position().map(|p| p.line()).unwrap_or(0),
                    content: String::new(),
                    message: format!("Unreadable line: {err}"),
                });
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let content = record.iter().collect::<Vec<_>>().join(",");

        if record.len() < 3 {
            report.errors.push(ImportLineError {
                line,
                content,
                message: "Expected LastName,FirstName,Handicap".to_string(),
            });
            continue;
        }

        let name = format!("{}, {}", &record[1], &record[0]);
        match Player::parse(PlayerId(next_id), &name, &record[2]) {
            Ok(player) => {
                report.players.push(player);
                next_id += 1;
            }
            Err(err) => report.errors.push(ImportLineError {
                line,
                content,
                message: err.to_string(),
            }),
        }
    }

    log::debug!(
        "roster import: {} player(s), {} rejected line(s)",
        report.players.len(),
        report.errors.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_import() {
        let report = parse_roster("A,B,10\nC,D,bad\n", PlayerId(1));

        assert_eq!(report.players.len(), 1);
        let p = &report.players[0];
        assert_eq!(p.name, "B, A");
        assert!((p.handicap_value - 10.0).abs() < 1e-10);
        assert_eq!(p.id, PlayerId(1));

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[0].content, "C,D,bad");
        assert!(!report.is_clean());
    }

    #[test]
    fn test_plus_handicap_and_whitespace() {
        let report = parse_roster(" Ng , Pat , +2.5 \nDoe,Jane,5", PlayerId(10));
        assert!(report.is_clean());
        assert_eq!(report.players[0].name, "Pat, Ng");
        assert!(report.players[0].is_plus);
        assert_eq!(report.players[1].id, PlayerId(11));
    }

    #[test]
    fn test_short_line_rejected() {
        let report = parse_roster("Smith,John\nLee,Kim,20", PlayerId(1));
        assert_eq!(report.players.len(), 1);
        assert_eq!(report.errors[0].line, 1);
        assert!(report.errors[0].message.contains("Expected"));
    }

    #[test]
    fn test_out_of_range_handicap_rejected() {
        let report = parse_roster("A,B,60\nC,D,-1\nE,F,54", PlayerId(1));
        assert_eq!(report.players.len(), 1);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let report = parse_roster("\nA,B,1\n\n   \nC,D,2\n", PlayerId(1));
        assert!(report.is_clean());
        assert_eq!(report.players.len(), 2);
    }

    #[test]
    fn test_empty_names_rejected() {
        let report = parse_roster(",B,10\nA,,10", PlayerId(1));
        assert!(report.players.is_empty());
        assert_eq!(report.errors.len(), 2);
    }
}
