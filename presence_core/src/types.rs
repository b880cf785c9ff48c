//! Core domain types for the shared-presence system.
//!
//! A schedule is a flat ascending sequence of non-negative time points
//! interpreted as consecutive (start, end) pairs. Three schedules take
//! part in every computation: the lesson window, the pupil's presence
//! intervals and the tutor's presence intervals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three input schedules a value or error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleName {
    Lesson,
    Pupil,
    Tutor,
}

impl fmt::Display for ScheduleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScheduleName::Lesson => "lesson",
            ScheduleName::Pupil => "pupil",
            ScheduleName::Tutor => "tutor",
        };
        f.write_str(name)
    }
}

/// A closed time span with `start <= end`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Length of the span; zero for a degenerate point interval
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// True when `other` lies entirely within this interval
    /// (boundary-touching counts as contained)
    pub fn contains(&self, other: &Interval) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// A named flat sequence of time points, pairwise (start, end)
///
/// The sequence is kept exactly as supplied; validation of structure
/// (non-empty, even length, disjoint ascending pairs) happens in the
/// `validate` module, not on construction.
#[derive(Clone, Debug)]
pub struct Schedule {
    name: ScheduleName,
    points: Vec<u64>,
}

impl Schedule {
    pub fn new(name: ScheduleName, points: impl Into<Vec<u64>>) -> Self {
        Self {
            name,
            points: points.into(),
        }
    }

    pub fn name(&self) -> ScheduleName {
        self.name
    }

    pub fn points(&self) -> &[u64] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The interval starting at flat index `i` (i is even; `i + 1`
    /// must be in bounds, guaranteed after the parity check)
    pub fn pair_at(&self, i: usize) -> Interval {
        Interval::new(self.points[i], self.points[i + 1])
    }
}

/// On-disk input format accepted by the CLI: the three flat point
/// sequences of one computation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PresenceRecord {
    pub lesson: Vec<u64>,
    pub pupil: Vec<u64>,
    pub tutor: Vec<u64>,
}

/// Terminal result of one pipeline run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Total shared duration in time units
    Total(u64),
    /// The caller declined to continue past a self-overlap warning;
    /// a deliberate stop, not an error
    Aborted,
}
