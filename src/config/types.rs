//! Configuration types for the store hours engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{FixedOffset, NaiveTime, Weekday};
use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{DaySchedule, WEEKDAYS, WeekConfiguration, hhmm, hhmm_option, weekday_full};

/// Metadata about the store, from `store.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreMetadata {
    /// The human-readable name of the store.
    pub name: String,
    /// The store's UTC offset, formatted `+HH:MM` or `-HH:MM`.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

fn default_utc_offset() -> String {
    "+00:00".to_string()
}

/// A weekday name in a configuration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct WeekdayName(#[serde(with = "weekday_full")] pub Weekday);

/// Compact schedule form: one set of hours shared by the regular business
/// days, plus an optional alternate Saturday.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursProfile {
    /// Opening time shared by all open days.
    #[serde(with = "hhmm")]
    pub open_time: NaiveTime,
    /// Closing time shared by all open days.
    #[serde(with = "hhmm")]
    pub close_time: NaiveTime,
    /// Lunch start on regular business days.
    #[serde(default, with = "hhmm_option")]
    pub lunch_start_time: Option<NaiveTime>,
    /// Lunch end on regular business days.
    #[serde(default, with = "hhmm_option")]
    pub lunch_end_time: Option<NaiveTime>,
    /// Weekdays open every week.
    pub regular_business_days: Vec<WeekdayName>,
    /// Whether Saturday is open on alternate weeks.
    #[serde(default)]
    pub alternate_saturday: bool,
}

impl HoursProfile {
    /// Expands the profile into a full seven-day configuration.
    ///
    /// Regular business days get the shared hours and lunch. Saturday, when
    /// `alternate_saturday` is set and it is not already a regular day, is
    /// open alternate-weeks-only without lunch. Every other weekday is
    /// configured closed with the shared times.
    pub fn to_week_configuration(&self) -> EngineResult<WeekConfiguration> {
        let is_regular = |weekday: Weekday| {
            self.regular_business_days
                .iter()
                .any(|WeekdayName(day)| *day == weekday)
        };

        let schedules = WEEKDAYS.iter().map(|&weekday| {
            let mut schedule = DaySchedule::open(weekday, self.open_time, self.close_time);
            if is_regular(weekday) {
                schedule.lunch_start = self.lunch_start_time;
                schedule.lunch_end = self.lunch_end_time;
            } else if weekday == Weekday::Sat && self.alternate_saturday {
                schedule.alternate_weeks_only = true;
            } else {
                schedule.is_open = false;
            }
            schedule
        });

        WeekConfiguration::from_schedules(schedules)
    }
}

/// Weekly schedule file structure, from `schedule.yaml`.
///
/// Exactly one of `days` and `profile` must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// One entry per configured weekday.
    #[serde(default)]
    pub days: Option<Vec<DaySchedule>>,
    /// Compact form shared by all business days.
    #[serde(default)]
    pub profile: Option<HoursProfile>,
}

/// The complete store configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store metadata.
    metadata: StoreMetadata,
    /// The parsed UTC offset of the store.
    offset: FixedOffset,
    /// The weekly schedule.
    week: WeekConfiguration,
}

impl StoreConfig {
    /// Creates a new StoreConfig from its component parts.
    pub fn new(metadata: StoreMetadata, offset: FixedOffset, week: WeekConfiguration) -> Self {
        Self {
            metadata,
            offset,
            week,
        }
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Returns the store's UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the weekly schedule.
    pub fn week(&self) -> &WeekConfiguration {
        &self.week
    }

    /// Consumes the configuration, returning the weekly schedule.
    pub fn into_week(self) -> WeekConfiguration {
        self.week
    }
}

/// Parses a `+HH:MM` / `-HH:MM` UTC offset.
///
/// # Example
///
/// ```
/// use store_hours::config::parse_utc_offset;
///
/// assert_eq!(parse_utc_offset("+10:00").unwrap().local_minus_utc(), 36_000);
/// assert_eq!(parse_utc_offset("-03:30").unwrap().local_minus_utc(), -12_600);
/// assert!(parse_utc_offset("10").is_none());
/// ```
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    value.parse::<FixedOffset>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn profile() -> HoursProfile {
        HoursProfile {
            open_time: t(8, 0),
            close_time: t(16, 0),
            lunch_start_time: Some(t(12, 0)),
            lunch_end_time: Some(t(12, 45)),
            regular_business_days: vec![
                WeekdayName(Weekday::Mon),
                WeekdayName(Weekday::Wed),
                WeekdayName(Weekday::Fri),
            ],
            alternate_saturday: true,
        }
    }

    #[test]
    fn test_profile_expands_to_seven_days() {
        let week = profile().to_week_configuration().unwrap();
        assert_eq!(week.len(), 7);

        let monday = week.get(Weekday::Mon).unwrap();
        assert!(monday.is_open);
        assert_eq!(monday.lunch_window(), Some((t(12, 0), t(12, 45))));

        let tuesday = week.get(Weekday::Tue).unwrap();
        assert!(!tuesday.is_open);

        let saturday = week.get(Weekday::Sat).unwrap();
        assert!(saturday.is_open);
        assert!(saturday.alternate_weeks_only);
        assert_eq!(saturday.lunch_window(), None);

        assert!(!week.get(Weekday::Sun).unwrap().is_open);
    }

    #[test]
    fn test_profile_without_alternate_saturday_closes_saturday() {
        let mut profile = profile();
        profile.alternate_saturday = false;

        let week = profile.to_week_configuration().unwrap();
        assert!(!week.get(Weekday::Sat).unwrap().is_open);
    }

    #[test]
    fn test_regular_saturday_is_not_alternate() {
        let mut profile = profile();
        profile.regular_business_days.push(WeekdayName(Weekday::Sat));

        let week = profile.to_week_configuration().unwrap();
        let saturday = week.get(Weekday::Sat).unwrap();
        assert!(saturday.is_open);
        assert!(!saturday.alternate_weeks_only);
    }

    #[test]
    fn test_profile_deserializes_from_yaml() {
        let yaml = r#"
open_time: "08:00"
close_time: "16:00"
lunch_start_time: "12:00"
lunch_end_time: "12:45"
regular_business_days: [Monday, Wednesday, Friday]
alternate_saturday: true
"#;
        let profile: HoursProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.regular_business_days.len(), 3);
        assert_eq!(profile.regular_business_days[1], WeekdayName(Weekday::Wed));
    }

    #[test]
    fn test_parse_utc_offset_variants() {
        assert_eq!(parse_utc_offset("+00:00").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_utc_offset("+05:45").unwrap().local_minus_utc(), 20_700);
        assert!(parse_utc_offset("+24:00").is_none());
        assert!(parse_utc_offset("0100").is_none());
        assert!(parse_utc_offset("").is_none());
    }
}
