//! Error types for the presence_core library.

use crate::types::ScheduleName;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for presence_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A schedule was supplied with no elements; fatal
    #[error("schedule `{0}` is empty")]
    EmptySchedule(ScheduleName),

    /// A schedule has an odd number of elements and cannot form
    /// complete (start, end) pairs; fatal
    #[error("schedule `{0}` has an odd number of elements")]
    OddLength(ScheduleName),

    /// Two intervals within the same schedule are not disjoint and
    /// ascending; recoverable via the caller's decision channel
    #[error("schedule `{0}` contains overlapping intervals")]
    SelfOverlap(ScheduleName),

    /// Malformed numeric input at the boundary (non-integer, negative)
    #[error("invalid interval input: {0}")]
    InvalidInterval(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Hard validation failures abort the pipeline unconditionally;
    /// a self-overlap is the only validation error a caller may waive
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::SelfOverlap(_))
    }
}
