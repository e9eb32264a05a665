//! Application state for the store hours API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};

use crate::config::StoreConfig;
use crate::error::EngineResult;
use crate::repository::{InMemoryScheduleRepository, ScheduleRepository};

use super::clock::{Clock, SystemClock};
use super::request::{parse_date, parse_instant};

/// Shared application state.
///
/// Holds the schedule repository, the clock used when a caller omits the
/// instant, and the store's UTC offset.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn ScheduleRepository>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl AppState {
    /// Creates a new application state from its parts.
    pub fn new(
        repository: Arc<dyn ScheduleRepository>,
        clock: Arc<dyn Clock>,
        offset: FixedOffset,
    ) -> Self {
        Self {
            repository,
            clock,
            offset,
        }
    }

    /// Creates a state backed by an in-memory repository seeded from the
    /// loaded configuration, reading the system clock.
    pub fn from_config(config: StoreConfig) -> Self {
        let offset = config.offset();
        Self::new(
            Arc::new(InMemoryScheduleRepository::new(config.into_week())),
            Arc::new(SystemClock::new(offset)),
            offset,
        )
    }

    /// Replaces the clock.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns the schedule repository.
    pub fn repository(&self) -> &dyn ScheduleRepository {
        self.repository.as_ref()
    }

    /// Returns the store's UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the current store-local time.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now().with_timezone(&self.offset).naive_local()
    }

    /// Returns the current store-local date.
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Parses a caller-supplied instant, falling back to now when absent.
    pub fn resolve_instant(&self, input: Option<&str>) -> EngineResult<NaiveDateTime> {
        match input {
            Some(value) => parse_instant(value, self.offset),
            None => Ok(self.now()),
        }
    }

    /// Parses a caller-supplied date, falling back to today when absent.
    pub fn resolve_date(&self, input: Option<&str>) -> EngineResult<NaiveDate> {
        match input {
            Some(value) => parse_date(value, self.offset),
            None => Ok(self.today()),
        }
    }
}
