//! The validate → intersect → aggregate pipeline.
//!
//! One call, one result. Hard validation failures (empty schedule,
//! odd length) abort before any intersection work. A self-overlap is
//! the only recoverable failure: the injected decision function is
//! consulted once, and a refusal ends the run with `Outcome::Aborted`
//! rather than an error.

use crate::error::{Error, Result};
use crate::sweep::{collect_shared_intervals, total_duration};
use crate::types::{Outcome, Schedule, ScheduleName};
use crate::validate::run_validation;

/// Compute the total duration during which pupil and tutor are
/// simultaneously present inside the lesson window.
///
/// `decide` is called only when `check_overlaps` is set and a schedule
/// fails the disjoint-ascending check: returning `true` continues with
/// the acknowledged violation, `false` stops the run deliberately.
pub fn shared_presence<F>(
    lesson: &[u64],
    pupil: &[u64],
    tutor: &[u64],
    check_overlaps: bool,
    decide: F,
) -> Result<Outcome>
where
    F: FnOnce() -> bool,
{
    let lesson = Schedule::new(ScheduleName::Lesson, lesson);
    let pupil = Schedule::new(ScheduleName::Pupil, pupil);
    let tutor = Schedule::new(ScheduleName::Tutor, tutor);

    match run_validation(&lesson, &pupil, &tutor, check_overlaps) {
        Ok(()) => {}
        Err(overlap @ Error::SelfOverlap(_)) => {
            tracing::warn!("{}; results may differ from expectations", overlap);
            if !decide() {
                tracing::info!("caller declined to continue, stopping");
                return Ok(Outcome::Aborted);
            }
        }
        Err(fatal) => return Err(fatal),
    }

    let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
    let total = total_duration(&intervals);
    tracing::info!(total, "computed shared presence");

    Ok(Outcome::Total(total))
}
