//! Structural validation of input schedules.
//!
//! Two tiers of checks:
//! - hard: a schedule must be non-empty and of even length. These run
//!   for all three schedules before anything else and always abort.
//! - soft: intervals within one schedule must be disjoint and sorted
//!   ascending. This runs only when `check_overlaps` is set, after all
//!   hard checks have passed, and the caller may waive the failure.

use crate::error::{Error, Result};
use crate::types::Schedule;

/// Validate the three schedules of one computation.
///
/// Hard checks (emptiness, parity) run for every schedule in the order
/// lesson, pupil, tutor; the first failure wins. Only when all three
/// pass are the overlap checks run, in the same order.
pub fn run_validation(
    lesson: &Schedule,
    pupil: &Schedule,
    tutor: &Schedule,
    check_overlaps: bool,
) -> Result<()> {
    for schedule in [lesson, pupil, tutor] {
        check_not_empty(schedule)?;
        check_even_length(schedule)?;
    }
    if check_overlaps {
        for schedule in [lesson, pupil, tutor] {
            check_disjoint_ascending(schedule)?;
        }
    }
    Ok(())
}

fn check_not_empty(schedule: &Schedule) -> Result<()> {
    if schedule.is_empty() {
        return Err(Error::EmptySchedule(schedule.name()));
    }
    Ok(())
}

fn check_even_length(schedule: &Schedule) -> Result<()> {
    if schedule.len() % 2 != 0 {
        return Err(Error::OddLength(schedule.name()));
    }
    Ok(())
}

/// Walk the schedule in pairs and fail as soon as a pair starts at or
/// before the end of the pair preceding it. Touching intervals
/// (`next.start == current.end`) are deliberately flagged too: the
/// same participant cannot be present twice at one instant.
fn check_disjoint_ascending(schedule: &Schedule) -> Result<()> {
    let points = schedule.points();
    let mut current = schedule.pair_at(0);

    let mut i = 2;
    while i < points.len() {
        if points[i] > current.end {
            current = schedule.pair_at(i);
            i += 2;
        } else {
            return Err(Error::SelfOverlap(schedule.name()));
        }
    }
    Ok(())
}
