//! Store status models.
//!
//! [`StoreStatus`] is the three-way classification of an instant, and
//! [`StatusResult`] carries it together with the queried instant and, when
//! the store is not open, the next opening instant.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether the store is open, closed, or on its lunch break.
///
/// Serialized as `open`, `closed` or `lunch_break`.
///
/// # Example
///
/// ```
/// use store_hours::models::StoreStatus;
///
/// assert_eq!(StoreStatus::LunchBreak.as_str(), "lunch_break");
/// assert_eq!(StoreStatus::Open.to_string(), "open");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    /// Inside opening hours and outside the lunch window.
    Open,
    /// Not a business day, or outside opening hours.
    Closed,
    /// Inside the lunch window of a business day.
    LunchBreak,
}

impl StoreStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Open => "open",
            StoreStatus::Closed => "closed",
            StoreStatus::LunchBreak => "lunch_break",
        }
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    /// The classification.
    pub status: StoreStatus,
    /// The instant that was classified.
    pub instant: NaiveDateTime,
    /// The next opening instant; always `None` when the status is open, and
    /// `None` otherwise only if no day in the search horizon is open.
    pub next_opening: Option<NaiveDateTime>,
}

impl StatusResult {
    /// Returns true if the store is open at the classified instant.
    pub fn is_open(&self) -> bool {
        self.status == StoreStatus::Open
    }

    /// Returns true if the store is on its lunch break at the classified instant.
    pub fn is_lunch_break(&self) -> bool {
        self.status == StoreStatus::LunchBreak
    }
}
