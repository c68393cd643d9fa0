//! Streak & progress engine.
//!
//! Pure, deterministic calculations over a habit's sparse completion
//! record and its weekly tracking schedule: the current consecutive
//! streak, the longest streak ever achieved, month-scoped completion
//! percentages, and the status/quote presentation mapping. The engine
//! performs no I/O and holds no state of its own; callers hand it
//! immutable snapshots plus a "today" reference and read back derived
//! values.

pub mod date;
pub mod progress;
pub mod quotes;
pub mod schedule;
pub mod streak;

pub use date::{date_key, local_date_key, parse_date_key, today_local, weekday_index, weekday_of};
pub use progress::{
    month_progress, progress_series, trend, GraphRange, MonthProgress, SeriesPoint, Trend,
};
pub use quotes::{milestone_quotes, streak_quote, STREAK_MILESTONES};
pub use schedule::TrackingSchedule;
pub use streak::{current_streak, longest_streak, CURRENT_STREAK_LOOKBACK_DAYS};
