//! Month-scoped completion progress and the multi-month series behind the
//! progress graph.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::engine::schedule::TrackingSchedule;
use crate::record::CompletionRecord;

/// Completed-vs-scheduled tally for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthProgress {
    /// Tracking days in the month that are marked completed.
    pub completed: u32,
    /// Tracking days in the month that have arrived (future days in the
    /// current month are excluded; a wholly future month has none).
    pub total_tracking_days: u32,
    /// `round(100 * completed / total_tracking_days)`, 0 when the
    /// denominator is 0.
    pub percentage: u8,
}

/// Progress for the month containing `viewed`, relative to `today`.
pub fn month_progress(
    record: &CompletionRecord,
    schedule: &TrackingSchedule,
    viewed: NaiveDate,
    today: NaiveDate,
) -> MonthProgress {
    let mut completed = 0u32;
    let mut total = 0u32;

    let mut cursor = first_of_month(viewed);
    while cursor.month() == viewed.month() && cursor.year() == viewed.year() {
        // Days that have not arrived never count toward the denominator;
        // this also zeroes out wholly future months.
        if cursor <= today && schedule.is_tracking_day(cursor) {
            total += 1;
            if record.is_completed(cursor) {
                completed += 1;
            }
        }
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let percentage = if total > 0 {
        (f64::from(completed) * 100.0 / f64::from(total)).round() as u8
    } else {
        0
    };

    MonthProgress {
        completed,
        total_tracking_days: total,
        percentage,
    }
}

/// How far back the progress series reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphRange {
    ThreeMonths,
    SixMonths,
    OneYear,
    /// From the earliest recorded date; falls back to six months for an
    /// empty record.
    All,
}

impl Default for GraphRange {
    fn default() -> Self {
        GraphRange::SixMonths
    }
}

/// One month of the progress series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// First day of the month this point covers.
    pub month: NaiveDate,
    pub progress: MonthProgress,
}

/// Monthly completion percentages from the start of `range` through the
/// month containing `today`, oldest first.
pub fn progress_series(
    record: &CompletionRecord,
    schedule: &TrackingSchedule,
    range: GraphRange,
    today: NaiveDate,
) -> Vec<SeriesPoint> {
    let start = series_start(record, range, today);
    let end = first_of_month(today);

    let mut points = Vec::new();
    let mut month = first_of_month(start);
    while month <= end {
        points.push(SeriesPoint {
            month,
            progress: month_progress(record, schedule, month, today),
        });
        month = match month.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    points
}

/// Overall direction of a progress series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Compare the mean of the last three months against the mean of the
/// earlier ones. `None` with fewer than two points.
pub fn trend(series: &[SeriesPoint]) -> Option<Trend> {
    if series.len() < 2 {
        return None;
    }
    let split = series.len().saturating_sub(3);
    let (older, recent) = series.split_at(split);
    let mean = |points: &[SeriesPoint]| {
        points
            .iter()
            .map(|p| f64::from(p.progress.percentage))
            .sum::<f64>()
            / points.len() as f64
    };
    let avg_recent = mean(recent);
    let avg_older = if older.is_empty() { 0.0 } else { mean(older) };

    if avg_recent > avg_older + 10.0 {
        Some(Trend::Improving)
    } else if avg_recent < avg_older - 10.0 {
        Some(Trend::Declining)
    } else {
        Some(Trend::Stable)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn series_start(record: &CompletionRecord, range: GraphRange, today: NaiveDate) -> NaiveDate {
    let months_back = |n: u32| today.checked_sub_months(Months::new(n)).unwrap_or(today);
    match range {
        GraphRange::ThreeMonths => months_back(3),
        GraphRange::SixMonths => months_back(6),
        GraphRange::OneYear => months_back(12),
        GraphRange::All => record.earliest().unwrap_or_else(|| months_back(6)),
    }
}
