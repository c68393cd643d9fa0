//! First-run seeding.
//!
//! New installs get a starter habit and, when the calendar allows it, a
//! short completed run so the streak and calendar views have something to
//! show.

use chrono::{Datelike, NaiveDate};

use crate::engine::TrackingSchedule;
use crate::error::ValidationError;
use crate::habit::Habit;
use crate::record::CompletionRecord;

pub const STARTER_HABIT_NAME: &str = "My Habit";
/// Length of the seeded run ending today.
pub const STARTER_STREAK_DAYS: u32 = 3;

/// The habit created on first run: default color, tracked every day.
pub fn starter_habit() -> Result<Habit, ValidationError> {
    Habit::new(STARTER_HABIT_NAME, TrackingSchedule::every_day())
}

/// Sample data for the starter habit: a completed run ending today, only
/// when the whole run fits inside the current month.
pub fn seed_starter_record(today: NaiveDate) -> CompletionRecord {
    let mut record = CompletionRecord::new();
    if today.day() >= STARTER_STREAK_DAYS {
        let mut cursor = today;
        for _ in 0..STARTER_STREAK_DAYS {
            record.mark_completed(cursor);
            cursor = match cursor.pred_opt() {
                Some(prev) => prev,
                None => break,
            };
        }
    }
    record
}
