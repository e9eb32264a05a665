//! Configuration loading for the store hours engine.
//!
//! This module loads the store metadata and the weekly schedule from YAML
//! files. The schedule is either an explicit list of day schedules or a
//! compact hours profile expanded to all seven weekdays.
//!
//! # Example
//!
//! ```no_run
//! use store_hours::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/store").unwrap();
//! println!("Loaded store: {}", config.store().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HoursProfile, ScheduleConfig, StoreConfig, StoreMetadata, WeekdayName, parse_utc_offset,
};
