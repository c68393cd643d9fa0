//! Current- and longest-streak calculators.
//!
//! Both walks measure runs of *scheduled* occurrences, not raw calendar
//! adjacency: a Mon/Wed/Fri habit completed three scheduled days in a row
//! has a streak of 3 even though a week of calendar days elapsed.

use chrono::NaiveDate;

use crate::engine::schedule::TrackingSchedule;
use crate::record::CompletionRecord;

/// Hard cap on the backward scan. A streak is never reported as greater
/// than this even if the true unbroken run is longer.
pub const CURRENT_STREAK_LOOKBACK_DAYS: u32 = 365;

/// Consecutive completed tracking days ending at `today`, scanned
/// backward.
///
/// Non-tracking days neither count nor break the run. Incomplete tracking
/// days more recent than the first completion are tolerated, so a user who
/// starts mid-week is not penalized for the scheduled days before they
/// began; once the run has started, the first incomplete tracking day ends
/// it.
pub fn current_streak(
    record: &CompletionRecord,
    schedule: &TrackingSchedule,
    today: NaiveDate,
) -> u32 {
    let mut streak = 0;
    let mut started = false;
    let mut cursor = today;

    for _ in 0..CURRENT_STREAK_LOOKBACK_DAYS {
        if schedule.is_tracking_day(cursor) {
            if record.is_completed(cursor) {
                streak += 1;
                started = true;
            } else if started {
                break;
            }
        }
        cursor = match cursor.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }

    streak
}

/// Longest run of consecutive tracking-day completions anywhere in the
/// record's history. Returns 0 when nothing is completed.
///
/// A run continues only when the next *scheduled* tracking day after the
/// previous completion is itself completed; anything else resets the run
/// to 1.
pub fn longest_streak(record: &CompletionRecord, schedule: &TrackingSchedule) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut last_completed: Option<NaiveDate> = None;

    for date in record.completed_dates() {
        // Completions on unscheduled days can exist after a schedule edit;
        // they neither extend nor reset a run.
        if !schedule.is_tracking_day(date) {
            continue;
        }

        run = match last_completed {
            None => 1,
            Some(prev) => match next_tracking_day(schedule, prev) {
                Some(expected) if expected == date => run + 1,
                // Missed the expected occurrence, or (defensively) no
                // tracking day within a week of the previous one.
                _ => 1,
            },
        };

        best = best.max(run);
        last_completed = Some(date);
    }

    best
}

/// First tracking day strictly after `after`, probing at most 7 days out.
/// `None` is unreachable for any schedule with at least one weekday.
fn next_tracking_day(schedule: &TrackingSchedule, after: NaiveDate) -> Option<NaiveDate> {
    let mut cursor = after;
    for _ in 0..7 {
        cursor = cursor.succ_opt()?;
        if schedule.is_tracking_day(cursor) {
            return Some(cursor);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_of(dates: &[NaiveDate]) -> CompletionRecord {
        let mut record = CompletionRecord::new();
        for &d in dates {
            record.mark_completed(d);
        }
        record
    }

    #[test]
    fn three_day_run_ending_today() {
        let record = record_of(&[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
        let schedule = TrackingSchedule::every_day();
        let today = date(2024, 1, 3);
        assert_eq!(current_streak(&record, &schedule, today), 3);
        assert_eq!(longest_streak(&record, &schedule), 3);
    }

    #[test]
    fn gap_yesterday_limits_streak_to_today() {
        let record = record_of(&[date(2024, 1, 1), date(2024, 1, 3)]);
        let schedule = TrackingSchedule::every_day();
        let today = date(2024, 1, 3);
        assert_eq!(current_streak(&record, &schedule, today), 1);
        assert_eq!(longest_streak(&record, &schedule), 1);
    }

    #[test]
    fn empty_record_has_no_streak() {
        let record = CompletionRecord::new();
        let schedule = TrackingSchedule::every_day();
        assert_eq!(current_streak(&record, &schedule, date(2024, 1, 3)), 0);
        assert_eq!(longest_streak(&record, &schedule), 0);
    }

    #[test]
    fn streak_survives_an_incomplete_today() {
        // Today not yet done: the run that ended yesterday still counts.
        let record = record_of(&[date(2024, 1, 1), date(2024, 1, 2)]);
        let schedule = TrackingSchedule::every_day();
        assert_eq!(current_streak(&record, &schedule, date(2024, 1, 3)), 2);
    }

    #[test]
    fn weekly_schedule_counts_scheduled_occurrences() {
        // Mon/Wed/Fri, completed Mon Jan 1, Wed Jan 3, Fri Jan 5.
        let schedule = TrackingSchedule::on_days(&[1, 3, 5]).unwrap();
        let record = record_of(&[date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 5)]);
        // Seven calendar days elapsed, three scheduled occurrences.
        assert_eq!(current_streak(&record, &schedule, date(2024, 1, 7)), 3);
        assert_eq!(longest_streak(&record, &schedule), 3);
    }

    #[test]
    fn missed_scheduled_day_breaks_the_run() {
        // Mon/Wed/Fri; Wednesday skipped.
        let schedule = TrackingSchedule::on_days(&[1, 3, 5]).unwrap();
        let record = record_of(&[date(2024, 1, 1), date(2024, 1, 5)]);
        assert_eq!(current_streak(&record, &schedule, date(2024, 1, 5)), 1);
        assert_eq!(longest_streak(&record, &schedule), 1);
    }

    #[test]
    fn mid_week_adopter_is_not_penalized() {
        // Daily habit, first ever completion was yesterday; the empty
        // tracking days before it must not break anything.
        let record = record_of(&[date(2024, 6, 14), date(2024, 6, 15)]);
        let schedule = TrackingSchedule::every_day();
        assert_eq!(current_streak(&record, &schedule, date(2024, 6, 15)), 2);
    }

    #[test]
    fn completions_on_unscheduled_days_are_ignored() {
        // Mon-only schedule with a stray Tuesday completion between two
        // Mondays: the Mondays still chain.
        let schedule = TrackingSchedule::on_days(&[1]).unwrap();
        let record = record_of(&[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 8)]);
        assert_eq!(longest_streak(&record, &schedule), 2);
        assert_eq!(current_streak(&record, &schedule, date(2024, 1, 8)), 2);
    }

    #[test]
    fn current_streak_caps_at_365() {
        // 400 consecutive completed days on a daily habit.
        let today = date(2024, 12, 31);
        let mut dates = Vec::new();
        let mut cursor = today;
        for _ in 0..400 {
            dates.push(cursor);
            cursor = cursor.pred_opt().unwrap();
        }
        let record = record_of(&dates);
        let schedule = TrackingSchedule::every_day();
        assert_eq!(
            current_streak(&record, &schedule, today),
            CURRENT_STREAK_LOOKBACK_DAYS
        );
        // The forward scan has no such cap.
        assert_eq!(longest_streak(&record, &schedule), 400);
    }

    #[test]
    fn longest_remembers_historical_runs() {
        // A five-day run in March, then a two-day run ending today.
        let mut dates: Vec<NaiveDate> = (10..15).map(|d| date(2024, 3, d)).collect();
        dates.push(date(2024, 6, 1));
        dates.push(date(2024, 6, 2));
        let record = record_of(&dates);
        let schedule = TrackingSchedule::every_day();
        assert_eq!(current_streak(&record, &schedule, date(2024, 6, 2)), 2);
        assert_eq!(longest_streak(&record, &schedule), 5);
    }

    #[test]
    fn runs_chain_across_a_month_boundary() {
        let schedule = TrackingSchedule::every_day();
        let record = record_of(&[date(2024, 1, 31), date(2024, 2, 1)]);
        assert_eq!(longest_streak(&record, &schedule), 2);
    }
}
