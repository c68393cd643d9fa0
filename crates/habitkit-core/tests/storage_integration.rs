//! End-to-end storage tests against a real database file.

use chrono::NaiveDate;
use tempfile::TempDir;

use habitkit_core::engine::{current_streak, longest_streak, month_progress};
use habitkit_core::premium::{PlanId, StoredEntitlement, SubscriptionProvider};
use habitkit_core::{Database, DayStatus, Habit, TrackingSchedule};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_flow_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("habitkit.db");

    let habit_id;
    {
        let db = Database::open_at(&path).unwrap();
        let habit = Habit::new("Gym", TrackingSchedule::on_days(&[1, 3, 5]).unwrap()).unwrap();
        habit_id = habit.id.clone();
        db.insert_habit(&habit).unwrap();
        db.set_selected_habit(&habit.id).unwrap();

        // Mon Jan 1, Wed Jan 3, Fri Jan 5 of 2024.
        for day in [1, 3, 5] {
            db.set_status(&habit.id, date(2024, 1, day), DayStatus::Completed)
                .unwrap();
        }

        let mut provider = StoredEntitlement::new(&db);
        provider.purchase(PlanId::Monthly).unwrap();
    }

    // Reopen and recompute everything from persisted state.
    let db = Database::open_at(&path).unwrap();
    assert_eq!(db.selected_habit().unwrap().as_deref(), Some(habit_id.as_str()));

    let habit = db.get_habit(&habit_id).unwrap().unwrap();
    let record = db.record_for(&habit_id).unwrap();
    let schedule = habit.schedule();

    assert_eq!(current_streak(&record, schedule, date(2024, 1, 7)), 3);
    assert_eq!(longest_streak(&record, schedule), 3);

    // January 2024 has 5 Mondays, 5 Wednesdays, 4 Fridays = 14 tracking
    // days once the month is fully past.
    let progress = month_progress(&record, schedule, date(2024, 1, 1), date(2024, 3, 1));
    assert_eq!(progress.total_tracking_days, 14);
    assert_eq!(progress.completed, 3);
    assert_eq!(progress.percentage, 21);

    let provider = StoredEntitlement::new(&db);
    assert!(provider.is_subscription_active());
    assert_eq!(provider.current().unwrap().plan, PlanId::Monthly);
}

#[test]
fn deleting_a_habit_drops_its_history() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_at(&dir.path().join("habitkit.db")).unwrap();

    let keep = Habit::new("Keep", TrackingSchedule::every_day()).unwrap();
    let drop = Habit::new("Drop", TrackingSchedule::every_day()).unwrap();
    db.insert_habit(&keep).unwrap();
    db.insert_habit(&drop).unwrap();
    db.set_status(&keep.id, date(2024, 2, 1), DayStatus::Completed)
        .unwrap();
    db.set_status(&drop.id, date(2024, 2, 1), DayStatus::Completed)
        .unwrap();

    assert!(db.delete_habit(&drop.id).unwrap());

    assert_eq!(db.habit_count().unwrap(), 1);
    assert!(db.record_for(&drop.id).unwrap().is_empty());
    assert!(db.record_for(&keep.id).unwrap().is_completed(date(2024, 2, 1)));
}

#[test]
fn reserved_status_tags_round_trip() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_at(&dir.path().join("habitkit.db")).unwrap();

    let habit = Habit::new("Read", TrackingSchedule::every_day()).unwrap();
    db.insert_habit(&habit).unwrap();
    db.set_status(&habit.id, date(2024, 2, 1), DayStatus::Missed)
        .unwrap();
    db.set_status(&habit.id, date(2024, 2, 2), DayStatus::Completed)
        .unwrap();

    let record = db.record_for(&habit.id).unwrap();
    assert_eq!(record.status(date(2024, 2, 1)), Some(DayStatus::Missed));
    // Reserved tags never feed the streak calculators.
    assert_eq!(record.completed_dates().count(), 1);
}
