//! Two-pointer merge sweep over the pupil and tutor schedules.
//!
//! Both schedules are individually disjoint and ascending (validated,
//! or explicitly waived by the caller), so a single forward pass with
//! one index per schedule finds every maximal mutually-covered span.
//! Each result is clipped to the lesson window before it is recorded.

use crate::types::{Interval, Schedule};

/// Collect the maximal intervals during which pupil and tutor are
/// simultaneously present inside the lesson window.
///
/// The returned list is seeded with a degenerate `(0, 0)` interval.
/// It stays in the list: it sums to zero and exists only so the
/// containment check against the last appended entry needs no
/// first-insertion special case.
pub fn collect_shared_intervals(
    lesson: &Schedule,
    pupil: &Schedule,
    tutor: &Schedule,
) -> Vec<Interval> {
    let window = lesson.pair_at(0);
    let mut result = vec![Interval::new(0, 0)];

    let mut i = 0;
    let mut j = 0;

    while i < pupil.len() && j < tutor.len() {
        let p = pupil.pair_at(i);
        let t = tutor.pair_at(j);

        // Non-strict on both sides: touching intervals overlap in a
        // single point and contribute a zero-length result.
        if p.start <= t.end && t.start <= p.end {
            let start = p.start.max(t.start).max(window.start);
            let end = p.end.min(t.end).min(window.end);

            // start > end means the raw overlap lies entirely outside
            // the lesson window: nothing to record.
            if start <= end {
                let shared = Interval::new(start, end);

                // Adjacent source intervals can regenerate a span
                // already captured; only the last appended entry can
                // contain it, because both schedules advance
                // monotonically.
                let last = result.last().copied().unwrap_or(Interval::new(0, 0));
                if !last.contains(&shared) {
                    result.push(shared);
                }
            }

            // Whichever interval ends first is exhausted; on an exact
            // tie both are.
            if p.end > t.end {
                j += 2;
            } else if p.end < t.end {
                i += 2;
            } else {
                i += 2;
                j += 2;
            }
        } else if t.start > p.end {
            i += 2;
        } else {
            j += 2;
        }
    }

    result
}

/// Total duration of a result list: `Σ (end − start)` over every
/// entry, sentinel included (it contributes zero).
pub fn total_duration(intervals: &[Interval]) -> u64 {
    intervals.iter().map(Interval::duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScheduleName;

    fn schedules(lesson: &[u64], pupil: &[u64], tutor: &[u64]) -> (Schedule, Schedule, Schedule) {
        (
            Schedule::new(ScheduleName::Lesson, lesson.to_vec()),
            Schedule::new(ScheduleName::Pupil, pupil.to_vec()),
            Schedule::new(ScheduleName::Tutor, tutor.to_vec()),
        )
    }

    fn total(lesson: &[u64], pupil: &[u64], tutor: &[u64]) -> u64 {
        let (lesson, pupil, tutor) = schedules(lesson, pupil, tutor);
        total_duration(&collect_shared_intervals(&lesson, &pupil, &tutor))
    }

    #[test]
    fn test_result_keeps_sentinel_at_front() {
        let (lesson, pupil, tutor) = schedules(&[0, 50], &[10, 20], &[15, 30]);
        let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
        assert_eq!(intervals[0], Interval::new(0, 0));
        assert_eq!(intervals[1], Interval::new(15, 20));
    }

    #[test]
    fn test_full_scenario() {
        let total = total(
            &[0, 100],
            &[10, 20, 25, 45, 46, 50, 55, 80, 83, 89, 90, 99],
            &[5, 30, 35, 70, 71, 88, 89, 105],
        );
        assert_eq!(total, 67);
    }

    #[test]
    fn test_clipped_to_lesson_window() {
        // Raw overlap is (15, 30); the lesson ends at 25.
        let (lesson, pupil, tutor) = schedules(&[0, 25], &[10, 20, 25, 45], &[15, 30, 40, 49]);
        let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
        assert_eq!(intervals[1], Interval::new(15, 20));
        assert_eq!(intervals[2], Interval::new(25, 25));
        assert_eq!(total_duration(&intervals), 5);
    }

    #[test]
    fn test_clipping_bounds_total_by_window_length() {
        let lesson = [30, 40];
        let total = total(&lesson, &[0, 100], &[0, 100]);
        assert!(total <= lesson[1] - lesson[0]);
        assert_eq!(total, 10);
    }

    #[test]
    fn test_touching_intervals_yield_zero_length_overlap() {
        let (lesson, pupil, tutor) = schedules(&[0, 20], &[0, 10], &[10, 20]);
        let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
        assert_eq!(intervals[1], Interval::new(10, 10));
        assert_eq!(total_duration(&intervals), 0);
    }

    #[test]
    fn test_zero_length_interval_participates() {
        // A degenerate point inside the other schedule's interval
        // overlaps it under the non-strict comparisons.
        let (lesson, pupil, tutor) = schedules(&[0, 50], &[15, 15], &[10, 20]);
        let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
        assert_eq!(intervals[1], Interval::new(15, 15));
    }

    #[test]
    fn test_contained_candidate_is_discarded() {
        // With overlap checking waived, pupil's (30, 35) sits inside
        // the span already produced by (25, 45); it must not re-append.
        let (lesson, pupil, tutor) =
            schedules(&[0, 50], &[10, 20, 25, 45, 30, 35], &[15, 30, 40, 49]);
        let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
        assert_eq!(
            intervals,
            vec![
                Interval::new(0, 0),
                Interval::new(15, 20),
                Interval::new(25, 30),
                Interval::new(40, 45),
            ]
        );
        assert_eq!(total_duration(&intervals), 15);
    }

    #[test]
    fn test_overlap_entirely_outside_window_is_dropped() {
        let (lesson, pupil, tutor) = schedules(&[0, 25], &[30, 40], &[35, 50]);
        let intervals = collect_shared_intervals(&lesson, &pupil, &tutor);
        assert_eq!(intervals, vec![Interval::new(0, 0)]);
        assert_eq!(total_duration(&intervals), 0);
    }

    #[test]
    fn test_symmetry_between_pupil_and_tutor() {
        let lesson = [0, 100];
        let a = [10, 20, 25, 45, 46, 50];
        let b = [5, 30, 35, 70];
        assert_eq!(total(&lesson, &a, &b), total(&lesson, &b, &a));
    }

    #[test]
    fn test_no_overlap_at_all() {
        assert_eq!(total(&[0, 100], &[0, 10, 20, 30], &[40, 50]), 0);
    }

    #[test]
    fn test_simultaneous_exhaustion_advances_both() {
        // Both intervals end at 20; afterwards the sweep must pair
        // (30, 40) with (25, 45), not re-test a stale pairing.
        assert_eq!(total(&[0, 100], &[10, 20, 30, 40], &[15, 20, 25, 45]), 15);
    }

    #[test]
    fn test_total_duration_sums_all_entries() {
        let intervals = vec![
            Interval::new(0, 0),
            Interval::new(5, 10),
            Interval::new(20, 27),
        ];
        assert_eq!(total_duration(&intervals), 12);
    }
}
