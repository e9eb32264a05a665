//! Human-readable rendering of engine results.

use chrono::{Datelike, NaiveDateTime};

use crate::models::{format_time, weekday_name};

/// Text shown when no opening lies within the search horizon.
pub const NO_UPCOMING_OPENING: &str = "No upcoming opening times found";

/// Describes the next opening relative to the queried instant.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use store_hours::api::describe_next_opening;
///
/// let at = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let thursday = at("2024-03-14 10:00");
///
/// assert_eq!(describe_next_opening(thursday, Some(at("2024-03-15 08:00"))), "Tomorrow at 08:00");
/// assert_eq!(describe_next_opening(thursday, Some(at("2024-03-18 08:00"))), "Monday at 08:00");
/// assert_eq!(describe_next_opening(thursday, None), "No upcoming opening times found");
/// ```
pub fn describe_next_opening(from: NaiveDateTime, next: Option<NaiveDateTime>) -> String {
    let Some(next) = next else {
        return NO_UPCOMING_OPENING.to_string();
    };

    let time = format_time(next.time());
    match (next.date() - from.date()).num_days() {
        0 => format!("Today at {}", time),
        1 => format!("Tomorrow at {}", time),
        2..=6 => format!("{} at {}", weekday_name(next.weekday()), time),
        _ => format!("{} at {}", next.date().format("%Y-%m-%d"), time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_same_day_is_today() {
        assert_eq!(
            describe_next_opening(at("2024-03-13 12:30"), Some(at("2024-03-13 12:45"))),
            "Today at 12:45"
        );
    }

    #[test]
    fn test_within_a_week_uses_weekday_name() {
        assert_eq!(
            describe_next_opening(at("2024-03-14 17:00"), Some(at("2024-03-20 08:00"))),
            "Wednesday at 08:00"
        );
    }

    #[test]
    fn test_a_week_or_more_uses_date() {
        assert_eq!(
            describe_next_opening(at("2024-03-16 09:00"), Some(at("2024-03-23 08:00"))),
            "2024-03-23 at 08:00"
        );
    }

    #[test]
    fn test_seconds_are_shown_when_present() {
        let next =
            NaiveDateTime::parse_from_str("2024-03-13 12:45:01", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(
            describe_next_opening(at("2024-03-13 12:45"), Some(next)),
            "Today at 12:45:01"
        );
    }
}
