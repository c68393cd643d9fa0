//! Plain-text data export.
//!
//! Produces the human-readable dump offered from the settings screen.
//! Writing the string to a file and any sharing mechanics stay with the
//! caller.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::engine::date_key;
use crate::habit::Habit;
use crate::record::CompletionRecord;

/// Render every habit's completion history as readable text.
pub fn export_summary(
    habits: &[Habit],
    records: &HashMap<String, CompletionRecord>,
    is_premium: bool,
    exported_at: DateTime<Local>,
) -> String {
    let empty = CompletionRecord::new();
    let sections: Vec<String> = habits
        .iter()
        .map(|habit| {
            let record = records.get(&habit.id).unwrap_or(&empty);
            let dates: Vec<String> = record.completed_dates().map(date_key).collect();
            format!(
                "Habit: {}\nColor: {}\nCreated: {}\nDays Tracked: {}\nDates: {}",
                habit.name,
                habit.color,
                habit
                    .created_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d"),
                dates.len(),
                dates.join(", ")
            )
        })
        .collect();

    format!(
        "Exported Habit Data\n\n{}\n\nPremium: {}\nExported: {}",
        sections.join("\n\n"),
        if is_premium { "Yes" } else { "No" },
        exported_at.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TrackingSchedule;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn summary_lists_each_habit_and_its_dates() {
        let mut habit = Habit::new("Read", TrackingSchedule::every_day()).unwrap();
        habit.id = "h1".into();
        let mut record = CompletionRecord::new();
        record.mark_completed(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        record.mark_completed(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let mut records = HashMap::new();
        records.insert("h1".to_string(), record);

        let exported_at = Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let text = export_summary(&[habit], &records, false, exported_at);

        assert!(text.starts_with("Exported Habit Data"));
        assert!(text.contains("Habit: Read"));
        assert!(text.contains("Days Tracked: 2"));
        assert!(text.contains("Dates: 2024-01-01, 2024-01-02"));
        assert!(text.contains("Premium: No"));
        assert!(text.contains("Exported: 2024-06-01 09:30"));
    }

    #[test]
    fn habit_without_record_shows_zero_days() {
        let habit = Habit::new("Gym", TrackingSchedule::every_day()).unwrap();
        let text = export_summary(&[habit], &HashMap::new(), true, Local::now());
        assert!(text.contains("Days Tracked: 0"));
        assert!(text.contains("Premium: Yes"));
    }
}
