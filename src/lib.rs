//! Store opening-hours engine.
//!
//! This crate answers business-day questions for a store with a weekly
//! schedule: whether a date is a business day, whether the store is open,
//! closed or on its lunch break at an instant, when it next opens, and which
//! opening windows a date has. Days may carry a lunch break and may be open
//! only on alternate (even ISO) weeks.
//!
//! The [`calendar`] engine is pure and takes every instant explicitly; the
//! [`api`] module wraps it in an axum service backed by a
//! [`repository::ScheduleRepository`].

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
