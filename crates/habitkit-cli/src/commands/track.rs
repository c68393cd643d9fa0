use clap::Subcommand;
use habitkit_core::engine::date_key;
use habitkit_core::{Database, DayStatus};
use serde_json::json;

use super::common::{resolve_date, resolve_habit};

#[derive(Subcommand)]
pub enum TrackAction {
    /// Mark a day completed
    Mark {
        /// Habit id (default: selected habit)
        #[arg(long)]
        habit: Option<String>,
        /// Day to mark, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a day's checkmark
    Unmark {
        /// Habit id (default: selected habit)
        #[arg(long)]
        habit: Option<String>,
        /// Day to unmark, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show today's status for a habit
    Today {
        /// Habit id (default: selected habit)
        #[arg(long)]
        habit: Option<String>,
    },
}

pub fn run(action: TrackAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        TrackAction::Mark { habit, date } => {
            let habit = resolve_habit(&db, habit.as_deref())?;
            let date = resolve_date(date.as_deref())?;
            // Unscheduled days are not markable, mirroring the disabled
            // calendar cells.
            if !habit.schedule().is_tracking_day(date) {
                return Err(format!(
                    "{} is not a tracking day for '{}'",
                    date_key(date),
                    habit.name
                )
                .into());
            }
            db.set_status(&habit.id, date, DayStatus::Completed)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "habit": habit.id,
                    "date": date_key(date),
                    "status": "completed",
                }))?
            );
        }
        TrackAction::Unmark { habit, date } => {
            let habit = resolve_habit(&db, habit.as_deref())?;
            let date = resolve_date(date.as_deref())?;
            db.clear_status(&habit.id, date)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "habit": habit.id,
                    "date": date_key(date),
                    "status": "none",
                }))?
            );
        }
        TrackAction::Today { habit } => {
            let habit = resolve_habit(&db, habit.as_deref())?;
            let today = resolve_date(None)?;
            let record = db.record_for(&habit.id)?;
            let status = record.status(today);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "habit": habit.id,
                    "date": date_key(today),
                    "is_tracking_day": habit.schedule().is_tracking_day(today),
                    "completed": record.is_completed(today),
                    "status": status.map(|s| s.as_str()).unwrap_or("none"),
                    "color": DayStatus::color(status),
                    "symbol": DayStatus::symbol(status),
                }))?
            );
        }
    }
    Ok(())
}
