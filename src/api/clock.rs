//! Wall-clock adapter for the API.
//!
//! The calendar never reads the current time. Handlers ask a [`Clock`] for
//! "now" only when the caller leaves the instant or date out.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::error::{EngineError, EngineResult};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system clock, reported in the store's offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Creates a system clock reporting in `offset`.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// A clock stuck at one instant.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, NaiveDate};
/// use store_hours::api::{Clock, FixedClock};
///
/// let offset = FixedOffset::east_opt(3600).unwrap();
/// let local = NaiveDate::from_ymd_opt(2024, 3, 13)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let clock = FixedClock::at_local(local, offset).unwrap();
///
/// assert_eq!(clock.now().naive_local(), local);
/// assert_eq!(clock.now().to_rfc3339(), "2024-03-13T10:00:00+01:00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always returns `now`.
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Creates a clock from a wall-clock time in `offset`.
    pub fn at_local(local: NaiveDateTime, offset: FixedOffset) -> EngineResult<Self> {
        localize(local, offset).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

/// Attaches `offset` to a store-local wall-clock time.
///
/// Fails with [`EngineError::InvalidInstant`] when the matching UTC instant
/// falls outside chrono's representable range.
pub fn localize(
    local: NaiveDateTime,
    offset: FixedOffset,
) -> EngineResult<DateTime<FixedOffset>> {
    local
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| EngineError::InvalidInstant {
            input: local.to_string(),
            message: format!("out of range at UTC offset {}", offset),
        })
}
