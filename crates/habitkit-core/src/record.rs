//! Per-habit completion records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion status tag for a single calendar day.
///
/// The engine only ever writes `Completed` (or removes the entry back to
/// the implicit "none"). `Missed` and `Broken` are reserved display tags
/// left over from the removed gap-detection feature; stored data may still
/// carry them and the calendar renders them, but nothing assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Completed,
    Missed,
    Broken,
}

impl DayStatus {
    /// Stable string tag, matching the persisted format.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Missed => "missed",
            DayStatus::Broken => "broken",
        }
    }

    /// Parse a stored status tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "completed" => Some(DayStatus::Completed),
            "missed" => Some(DayStatus::Missed),
            "broken" => Some(DayStatus::Broken),
            _ => None,
        }
    }

    /// Calendar cell color for a status; absence renders transparent.
    pub fn color(status: Option<DayStatus>) -> &'static str {
        match status {
            Some(DayStatus::Completed) => "#4CAF50",
            Some(DayStatus::Missed) => "#FFCDD2",
            Some(DayStatus::Broken) => "#F44336",
            None => "transparent",
        }
    }

    /// Calendar cell symbol for a status; absence renders empty.
    pub fn symbol(status: Option<DayStatus>) -> &'static str {
        match status {
            Some(DayStatus::Completed) => "\u{2713}",
            Some(DayStatus::Missed) => "\u{2717}",
            Some(DayStatus::Broken) => "!",
            None => "",
        }
    }
}

/// Sparse map from calendar date to completion status for one habit.
///
/// Absence of a date means "none". Keys serialize as `YYYY-MM-DD` local
/// date strings; iteration order is chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionRecord {
    days: BTreeMap<NaiveDate, DayStatus>,
}

impl CompletionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a day completed.
    pub fn mark_completed(&mut self, date: NaiveDate) {
        self.days.insert(date, DayStatus::Completed);
    }

    /// Remove any status for a day, returning it to the implicit "none".
    pub fn clear(&mut self, date: NaiveDate) {
        self.days.remove(&date);
    }

    /// Toggle a day between completed and none. Returns the new completed
    /// state.
    pub fn toggle_completed(&mut self, date: NaiveDate) -> bool {
        if self.is_completed(date) {
            self.clear(date);
            false
        } else {
            self.mark_completed(date);
            true
        }
    }

    /// Restore a stored status tag. Used when loading persisted records,
    /// which may carry the reserved `missed`/`broken` tags.
    pub fn set_status(&mut self, date: NaiveDate, status: DayStatus) {
        self.days.insert(date, status);
    }

    pub fn status(&self, date: NaiveDate) -> Option<DayStatus> {
        self.days.get(&date).copied()
    }

    pub fn is_completed(&self, date: NaiveDate) -> bool {
        self.status(date) == Some(DayStatus::Completed)
    }

    /// All completed dates in chronological order.
    pub fn completed_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(|(_, status)| **status == DayStatus::Completed)
            .map(|(date, _)| *date)
    }

    /// Earliest recorded date of any status.
    pub fn earliest(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, DayStatus)> + '_ {
        self.days.iter().map(|(date, status)| (*date, *status))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn mark_and_clear() {
        let mut record = CompletionRecord::new();
        let d = date(2024, 1, 1);
        assert!(!record.is_completed(d));
        record.mark_completed(d);
        assert!(record.is_completed(d));
        record.clear(d);
        assert!(record.status(d).is_none());
        assert!(record.is_empty());
    }

    #[test]
    fn toggle_round_trip() {
        let mut record = CompletionRecord::new();
        let d = date(2024, 1, 1);
        assert!(record.toggle_completed(d));
        assert!(!record.toggle_completed(d));
        assert!(record.is_empty());
    }

    #[test]
    fn completed_dates_skip_reserved_tags() {
        let mut record = CompletionRecord::new();
        record.mark_completed(date(2024, 1, 2));
        record.set_status(date(2024, 1, 1), DayStatus::Missed);
        record.set_status(date(2024, 1, 3), DayStatus::Broken);
        let completed: Vec<_> = record.completed_dates().collect();
        assert_eq!(completed, vec![date(2024, 1, 2)]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn serializes_as_date_keyed_map() {
        let mut record = CompletionRecord::new();
        record.mark_completed(date(2024, 1, 1));
        record.set_status(date(2024, 1, 2), DayStatus::Missed);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"2024-01-01":"completed","2024-01-02":"missed"}"#);
        let back: CompletionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn malformed_date_keys_fail_deserialization() {
        let err = serde_json::from_str::<CompletionRecord>(r#"{"01/02/2024":"completed"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn status_presentation_mapping() {
        assert_eq!(DayStatus::color(Some(DayStatus::Completed)), "#4CAF50");
        assert_eq!(DayStatus::color(Some(DayStatus::Missed)), "#FFCDD2");
        assert_eq!(DayStatus::color(Some(DayStatus::Broken)), "#F44336");
        assert_eq!(DayStatus::color(None), "transparent");
        assert_eq!(DayStatus::symbol(Some(DayStatus::Completed)), "\u{2713}");
        assert_eq!(DayStatus::symbol(None), "");
    }

    #[test]
    fn status_tags_round_trip() {
        for status in [DayStatus::Completed, DayStatus::Missed, DayStatus::Broken] {
            assert_eq!(DayStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(DayStatus::parse("none"), None);
    }
}
