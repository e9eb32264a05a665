//! Week configuration model.
//!
//! A [`WeekConfiguration`] maps each weekday to at most one [`DaySchedule`].
//! Weekdays without an entry are unconfigured and count as closed.

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

use super::DaySchedule;

/// The schedules of a whole week, at most one per weekday.
///
/// Serialized as a list ordered Monday to Sunday.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use store_hours::models::{DaySchedule, WeekConfiguration};
///
/// let week = WeekConfiguration::from_schedules(vec![
///     DaySchedule::open(
///         Weekday::Mon,
///         NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     ),
///     DaySchedule::closed(Weekday::Tue),
/// ])
/// .unwrap();
///
/// assert!(week.get(Weekday::Mon).is_some());
/// assert!(week.get(Weekday::Wed).is_none());
/// assert_eq!(week.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekConfiguration {
    days: [Option<DaySchedule>; 7],
}

impl WeekConfiguration {
    /// Creates an empty configuration (every weekday unconfigured).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a list of schedules.
    ///
    /// Returns [`EngineError::DuplicateWeekday`] if two schedules share a weekday.
    pub fn from_schedules<I>(schedules: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = DaySchedule>,
    {
        let mut config = Self::new();
        for schedule in schedules {
            let slot = &mut config.days[Self::index(schedule.weekday)];
            if slot.is_some() {
                return Err(EngineError::DuplicateWeekday {
                    weekday: schedule.weekday,
                });
            }
            *slot = Some(schedule);
        }
        Ok(config)
    }

    /// Returns the schedule for a weekday, if configured.
    pub fn get(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days[Self::index(weekday)].as_ref()
    }

    /// Inserts or replaces the schedule for its weekday, returning the previous one.
    pub fn insert(&mut self, schedule: DaySchedule) -> Option<DaySchedule> {
        let index = Self::index(schedule.weekday);
        self.days[index].replace(schedule)
    }

    /// Removes the schedule for a weekday, returning it if it was configured.
    pub fn remove(&mut self, weekday: Weekday) -> Option<DaySchedule> {
        self.days[Self::index(weekday)].take()
    }

    /// Iterates over the configured schedules, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter().flatten()
    }

    /// Returns the number of configured weekdays.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no weekday is configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(weekday: Weekday) -> usize {
        weekday.num_days_from_monday() as usize
    }
}

impl Serialize for WeekConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for WeekConfiguration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let schedules = Vec::<DaySchedule>::deserialize(deserializer)?;
        Self::from_schedules(schedules).map_err(serde::de::Error::custom)
    }
}
