use clap::Subcommand;
use habitkit_core::habit::DEFAULT_COLOR;
use habitkit_core::premium::{can_add_habit, StoredEntitlement, SubscriptionProvider};
use habitkit_core::{Database, Habit, TrackingSchedule};

use super::common::parse_days;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name (up to 30 characters)
        name: String,
        /// Optional description (up to 100 characters)
        #[arg(long)]
        description: Option<String>,
        /// Palette color, e.g. "#2196F3" (premium)
        #[arg(long)]
        color: Option<String>,
        /// Tracking weekdays as a comma list, 0=Sunday (default: every day)
        #[arg(long)]
        days: Option<String>,
    },
    /// List all habits
    List,
    /// Select the habit other commands default to
    Select { id: String },
    /// Rename a habit
    Rename { id: String, name: String },
    /// Change a habit's color (premium)
    Color { id: String, color: String },
    /// Change a habit's tracking weekdays
    Schedule {
        id: String,
        /// Comma list of weekdays, 0=Sunday
        days: String,
    },
    /// Set or clear a habit's description
    Describe {
        id: String,
        /// New description; empty clears it
        text: String,
    },
    /// Delete a habit and its completion history
    Delete { id: String },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let premium = StoredEntitlement::new(&db).is_subscription_active();

    match action {
        HabitAction::Add {
            name,
            description,
            color,
            days,
        } => {
            if !can_add_habit(premium, db.habit_count()?) {
                return Err(
                    "free tier tracks 1 habit; upgrade to premium for unlimited habits".into(),
                );
            }
            let schedule = match days {
                Some(spec) => TrackingSchedule::on_days(&parse_days(&spec)?)?,
                None => TrackingSchedule::every_day(),
            };
            let mut habit = Habit::new(&name, schedule)?;
            if let Some(text) = description {
                habit.set_description(&text)?;
            }
            if let Some(color) = color {
                if !premium && !color.eq_ignore_ascii_case(DEFAULT_COLOR) {
                    return Err("custom colors are a premium feature".into());
                }
                habit.set_color(&color)?;
            }
            db.insert_habit(&habit)?;
            if db.selected_habit()?.is_none() {
                db.set_selected_habit(&habit.id)?;
            }
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            let habits = db.list_habits()?;
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Select { id } => {
            if db.get_habit(&id)?.is_none() {
                return Err(format!("no habit with id {id}").into());
            }
            db.set_selected_habit(&id)?;
            println!("selected {id}");
        }
        HabitAction::Rename { id, name } => {
            let mut habit = require_habit(&db, &id)?;
            habit.rename(&name)?;
            db.update_habit(&habit)?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Color { id, color } => {
            if !premium && !color.eq_ignore_ascii_case(DEFAULT_COLOR) {
                return Err("custom colors are a premium feature".into());
            }
            let mut habit = require_habit(&db, &id)?;
            habit.set_color(&color)?;
            db.update_habit(&habit)?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Schedule { id, days } => {
            let mut habit = require_habit(&db, &id)?;
            habit.set_tracking_days(TrackingSchedule::on_days(&parse_days(&days)?)?);
            db.update_habit(&habit)?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Describe { id, text } => {
            let mut habit = require_habit(&db, &id)?;
            habit.set_description(&text)?;
            db.update_habit(&habit)?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Delete { id } => {
            if !db.delete_habit(&id)? {
                return Err(format!("no habit with id {id}").into());
            }
            println!("deleted {id}");
        }
    }
    Ok(())
}

fn require_habit(db: &Database, id: &str) -> Result<Habit, Box<dyn std::error::Error>> {
    db.get_habit(id)?
        .ok_or_else(|| format!("no habit with id {id}").into())
}
