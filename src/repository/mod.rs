//! Schedule storage.
//!
//! The engine never talks to storage itself: callers fetch a
//! [`WeekConfiguration`] snapshot through a [`ScheduleRepository`] once per
//! query and hand it to the calendar.

mod memory;

use chrono::Weekday;

use crate::error::EngineResult;
use crate::models::{DaySchedule, WeekConfiguration};

pub use memory::InMemoryScheduleRepository;

/// Storage of the per-weekday schedules.
///
/// Implementations must be `Send + Sync` so they can be shared by the HTTP
/// handlers. Reads return owned snapshots; a missing weekday is `None`, not
/// an error.
pub trait ScheduleRepository: Send + Sync {
    /// Returns the schedule of one weekday, if configured.
    fn get_schedule(&self, weekday: Weekday) -> EngineResult<Option<DaySchedule>>;

    /// Returns all configured schedules as one snapshot.
    fn get_all_schedules(&self) -> EngineResult<WeekConfiguration>;

    /// Inserts the schedule of a weekday that has none yet.
    ///
    /// Fails with [`EngineError::DuplicateWeekday`] when the weekday is
    /// already configured.
    ///
    /// [`EngineError::DuplicateWeekday`]: crate::error::EngineError::DuplicateWeekday
    fn create_schedule(&self, schedule: DaySchedule) -> EngineResult<DaySchedule>;

    /// Inserts or replaces the schedule of its weekday.
    fn upsert_schedule(&self, schedule: DaySchedule) -> EngineResult<DaySchedule>;

    /// Replaces several schedules at once; either all are written or none.
    fn upsert_many(&self, schedules: Vec<DaySchedule>) -> EngineResult<Vec<DaySchedule>>;

    /// Removes the schedule of a weekday, returning whether one existed.
    fn delete_schedule(&self, weekday: Weekday) -> EngineResult<bool>;
}
