//! Wire formats for times of day and weekday names.
//!
//! Times of day travel as zero-padded 24-hour `HH:MM` strings. Seconds are
//! accepted on input (`HH:MM:SS`) and only written back out when non-zero.
//! Weekdays travel as full English names (`"Monday"`); parsing is
//! case-insensitive and also accepts the three-letter abbreviations.

use chrono::{NaiveTime, Timelike, Weekday};

/// All seven weekdays, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the full English name of a weekday.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use store_hours::models::weekday_name;
///
/// assert_eq!(weekday_name(Weekday::Sat), "Saturday");
/// ```
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a weekday from its English name or abbreviation.
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}

/// Formats a time of day as `HH:MM`, or `HH:MM:SS` when seconds are set.
pub fn format_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Parses a time of day from `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Serde adapter for a [`NaiveTime`] stored as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serializes a time of day.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    /// Deserializes a time of day.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time '{raw}', expected HH:MM")))
    }
}

/// Serde adapter for an optional [`NaiveTime`] stored as `HH:MM` or null.
pub mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serializes an optional time of day.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_str(&super::format_time(*time)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional time of day.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => super::parse_time(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid time '{raw}', expected HH:MM"))),
        }
    }
}

/// Serde adapter for a [`chrono::Weekday`] stored as its full English name.
pub mod weekday_full {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serializes a weekday.
    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*weekday))
    }

    /// Deserializes a weekday.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_weekday(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid weekday '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_format_time_is_zero_padded() {
        assert_eq!(format_time(time(8, 0, 0)), "08:00");
        assert_eq!(format_time(time(12, 45, 0)), "12:45");
    }

    #[test]
    fn test_format_time_keeps_seconds_when_set() {
        assert_eq!(format_time(time(8, 0, 30)), "08:00:30");
    }

    #[test]
    fn test_parse_time_accepts_both_precisions() {
        assert_eq!(parse_time("08:00"), Some(time(8, 0, 0)));
        assert_eq!(parse_time("16:00:59"), Some(time(16, 0, 59)));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("8am"), None);
    }

    #[test]
    fn test_parse_weekday_is_case_insensitive() {
        assert_eq!(parse_weekday("Saturday"), Some(Weekday::Sat));
        assert_eq!(parse_weekday("monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("Wed"), Some(Weekday::Wed));
        assert_eq!(parse_weekday("Funday"), None);
    }

    #[test]
    fn test_weekdays_start_on_monday() {
        assert_eq!(WEEKDAYS[0], Weekday::Mon);
        assert_eq!(WEEKDAYS[6], Weekday::Sun);
        for (index, weekday) in WEEKDAYS.iter().enumerate() {
            assert_eq!(weekday.num_days_from_monday() as usize, index);
        }
    }
}
