//! Core data models for the store hours engine.
//!
//! This module contains the schedule entities the engine reads and the
//! values it computes.

mod day_schedule;
mod opening_window;
mod status;
mod time_format;
mod week_configuration;

pub use day_schedule::DaySchedule;
pub use opening_window::{DayOverview, LunchBreak, OpeningWindow, ScheduleEntry, WindowLayout};
pub use status::{StatusResult, StoreStatus};
pub use time_format::{
    WEEKDAYS, format_time, hhmm, hhmm_option, parse_time, parse_weekday, weekday_full,
    weekday_name,
};
pub use week_configuration::WeekConfiguration;
