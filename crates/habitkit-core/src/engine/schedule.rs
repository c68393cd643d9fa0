//! Weekly tracking schedules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::date::weekday_index;
use crate::error::ValidationError;

/// The set of weekdays on which a habit is due.
///
/// Habits created before schedule selection existed carry no day set and
/// track every day; that legacy state is `days: None`. An explicitly empty
/// set would mean "never due" -- [`TrackingSchedule::on_days`] refuses to
/// construct one, but stored data containing it is honored as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingSchedule {
    days: Option<Vec<u8>>,
}

impl TrackingSchedule {
    /// Schedule that tracks all seven days.
    pub fn every_day() -> Self {
        Self { days: None }
    }

    /// Schedule restricted to the given weekday indices (0 = Sunday).
    ///
    /// Duplicates are collapsed and the set is kept sorted.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyTrackingDays`] for an empty set and
    /// [`ValidationError::InvalidWeekday`] for an index outside 0..=6.
    pub fn on_days(days: &[u8]) -> Result<Self, ValidationError> {
        if days.is_empty() {
            return Err(ValidationError::EmptyTrackingDays);
        }
        let mut set: Vec<u8> = Vec::with_capacity(days.len());
        for &day in days {
            if day > 6 {
                return Err(ValidationError::InvalidWeekday(day));
            }
            if !set.contains(&day) {
                set.push(day);
            }
        }
        set.sort_unstable();
        Ok(Self { days: Some(set) })
    }

    /// Whether `date` falls on a scheduled weekday.
    pub fn is_tracking_day(&self, date: NaiveDate) -> bool {
        match &self.days {
            None => true,
            Some(days) => days.contains(&weekday_index(date)),
        }
    }

    /// Whether this schedule covers all seven weekdays.
    pub fn is_daily(&self) -> bool {
        match &self.days {
            None => true,
            Some(days) => days.len() == 7,
        }
    }

    /// The explicit weekday set, if one was ever chosen.
    pub fn days(&self) -> Option<&[u8]> {
        self.days.as_deref()
    }
}
