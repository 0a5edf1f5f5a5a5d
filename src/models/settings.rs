//! Tournament settings.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{PairingError, PairingResult};

/// How teams leave the tee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartFormat {
    /// Staggered tee times at a fixed interval.
    #[default]
    Sequential,
    /// Every team starts at the same time on its own hole.
    Shotgun,
}

/// User-adjustable tournament settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Use the balanced pick rule in interactive drafts.
    pub balance_teams: bool,
    /// Largest acceptable spread between team totals.
    pub max_handicap_diff: f64,
    /// Tee-off format.
    pub start_format: StartFormat,
    /// First tee time.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Minutes between sequential tee times.
    pub time_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            balance_teams: true,
            max_handicap_diff: 5.0,
            start_format: StartFormat::Sequential,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            time_interval: 10,
        }
    }
}

impl Settings {
    /// Sets the start format.
    pub fn with_start_format(mut self, format: StartFormat) -> Self {
        self.start_format = format;
        self
    }

    /// Sets the first tee time.
    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the sequential interval in minutes.
    pub fn with_time_interval(mut self, minutes: u32) -> Self {
        self.time_interval = minutes;
        self
    }

    /// Enables or disables balanced drafting.
    pub fn with_balance(mut self, balance_teams: bool) -> Self {
        self.balance_teams = balance_teams;
        self
    }

    /// Sets the acceptable team spread.
    pub fn with_max_handicap_diff(mut self, diff: f64) -> Self {
        self.max_handicap_diff = diff;
        self
    }

    /// Parses an `"HH:MM"` start time.
    pub fn parse_start_time(text: &str) -> PairingResult<NaiveTime> {
        NaiveTime::parse_from_str(text.trim(), hhmm::FORMAT).map_err(|_| {
            PairingError::validation(format!("Start time '{}' must be HH:MM", text.trim()))
        })
    }

    /// Checks value ranges.
    pub fn validate(&self) -> PairingResult<()> {
        if !self.max_handicap_diff.is_finite() || self.max_handicap_diff < 0.0 {
            return Err(PairingError::validation(
                "Maximum handicap difference must be zero or more",
            ));
        }
        if self.start_format == StartFormat::Sequential && self.time_interval == 0 {
            return Err(PairingError::validation(
                "Tee time interval must be at least 1 minute",
            ));
        }
        Ok(())
    }
}

/// `NaiveTime` as `"HH:MM"`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.balance_teams);
        assert_eq!(s.start_format, StartFormat::Sequential);
        assert_eq!(s.start_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(s.time_interval, 10);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let s = Settings::default().with_start_format(StartFormat::Shotgun);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["startFormat"], "shotgun");
        assert_eq!(json["startTime"], "08:00");
        assert_eq!(json["timeInterval"], 10);
        assert_eq!(json["balanceTeams"], true);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let s: Settings = serde_json::from_str(r#"{"startTime":"07:30"}"#).unwrap();
        assert_eq!(s.start_time, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(s.time_interval, 10);
    }

    #[test]
    fn test_bad_start_time_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"startTime":"7am"}"#).is_err());
        assert!(Settings::parse_start_time("25:00").is_err());
        assert_eq!(
            Settings::parse_start_time(" 09:15 ").unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_validate_ranges() {
        assert!(Settings::default().with_time_interval(0).validate().is_err());
        assert!(Settings::default()
            .with_start_format(StartFormat::Shotgun)
            .with_time_interval(0)
            .validate()
            .is_ok());
        assert!(Settings::default()
            .with_max_handicap_diff(-1.0)
            .validate()
            .is_err());
    }
}
