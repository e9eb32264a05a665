//! In-memory schedule repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Weekday;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DaySchedule, WeekConfiguration, weekday_name};

use super::ScheduleRepository;

/// A [`ScheduleRepository`] backed by a lock-protected [`WeekConfiguration`].
///
/// Usually seeded from the loaded YAML configuration. Writes are not
/// persisted beyond the process lifetime.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use store_hours::models::{DaySchedule, WeekConfiguration};
/// use store_hours::repository::{InMemoryScheduleRepository, ScheduleRepository};
///
/// let repository = InMemoryScheduleRepository::new(WeekConfiguration::new());
/// repository.upsert_schedule(DaySchedule::closed(Weekday::Sun)).unwrap();
///
/// assert!(repository.get_schedule(Weekday::Sun).unwrap().is_some());
/// assert_eq!(repository.get_all_schedules().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryScheduleRepository {
    week: RwLock<WeekConfiguration>,
}

impl InMemoryScheduleRepository {
    /// Creates a repository holding the given configuration.
    pub fn new(week: WeekConfiguration) -> Self {
        Self {
            week: RwLock::new(week),
        }
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, WeekConfiguration>> {
        self.week.read().map_err(|_| EngineError::Repository {
            message: "schedule store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, WeekConfiguration>> {
        self.week.write().map_err(|_| EngineError::Repository {
            message: "schedule store lock poisoned".to_string(),
        })
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn get_schedule(&self, weekday: Weekday) -> EngineResult<Option<DaySchedule>> {
        Ok(self.read()?.get(weekday).cloned())
    }

    fn get_all_schedules(&self) -> EngineResult<WeekConfiguration> {
        Ok(self.read()?.clone())
    }

    fn create_schedule(&self, schedule: DaySchedule) -> EngineResult<DaySchedule> {
        let mut week = self.write()?;
        if week.get(schedule.weekday).is_some() {
            return Err(EngineError::DuplicateWeekday {
                weekday: schedule.weekday,
            });
        }
        week.insert(schedule.clone());
        debug!(weekday = weekday_name(schedule.weekday), "Created day schedule");
        Ok(schedule)
    }

    fn upsert_schedule(&self, schedule: DaySchedule) -> EngineResult<DaySchedule> {
        let mut week = self.write()?;
        let replaced = week.insert(schedule.clone()).is_some();
        debug!(
            weekday = weekday_name(schedule.weekday),
            replaced, "Stored day schedule"
        );
        Ok(schedule)
    }

    fn upsert_many(&self, schedules: Vec<DaySchedule>) -> EngineResult<Vec<DaySchedule>> {
        // Reject duplicates before touching the store
        WeekConfiguration::from_schedules(schedules.iter().cloned())?;

        let mut week = self.write()?;
        for schedule in &schedules {
            week.insert(schedule.clone());
        }
        debug!(count = schedules.len(), "Stored day schedules in bulk");
        Ok(schedules)
    }

    fn delete_schedule(&self, weekday: Weekday) -> EngineResult<bool> {
        let removed = self.write()?.remove(weekday).is_some();
        debug!(weekday = weekday_name(weekday), removed, "Deleted day schedule");
        Ok(removed)
    }
}
