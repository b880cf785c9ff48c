#![forbid(unsafe_code)]

//! Core domain model and logic for the shared-presence system.
//!
//! This crate provides:
//! - Domain types (schedules, intervals, outcomes)
//! - Structural validation of input schedules
//! - The two-pointer interval intersection sweep
//! - The validate → intersect → aggregate pipeline

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod sweep;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use engine::shared_presence;
pub use error::{Error, Result};
pub use sweep::{collect_shared_intervals, total_duration};
pub use types::{Interval, Outcome, PresenceRecord, Schedule, ScheduleName};
pub use validate::run_validation;
