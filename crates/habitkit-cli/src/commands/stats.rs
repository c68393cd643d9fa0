use clap::Subcommand;
use habitkit_core::engine::{
    current_streak, longest_streak, month_progress, parse_date_key, progress_series, streak_quote,
    today_local, trend, GraphRange,
};
use habitkit_core::premium::{StoredEntitlement, SubscriptionProvider};
use habitkit_core::Database;
use serde_json::json;

use super::common::resolve_habit;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current and longest streaks
    Streak {
        /// Habit id (default: selected habit)
        #[arg(long)]
        habit: Option<String>,
    },
    /// Completion progress for one month
    Month {
        /// Habit id (default: selected habit)
        #[arg(long)]
        habit: Option<String>,
        /// Month to view as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Monthly progress series for the graph (premium)
    Graph {
        /// Habit id (default: selected habit)
        #[arg(long)]
        habit: Option<String>,
        /// Range: 3m, 6m, 1y or all
        #[arg(long, default_value = "6m")]
        range: String,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        StatsAction::Streak { habit } => {
            let habit = resolve_habit(&db, habit.as_deref())?;
            let record = db.record_for(&habit.id)?;
            let schedule = habit.schedule();
            let today = today_local();
            let current = current_streak(&record, schedule, today);
            let longest = longest_streak(&record, schedule);
            let quote = streak_quote(current, schedule, &mut rand::thread_rng());
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "habit": habit.id,
                    "current_streak": current,
                    "longest_streak": longest,
                    "quote": quote,
                }))?
            );
        }
        StatsAction::Month { habit, month } => {
            let habit = resolve_habit(&db, habit.as_deref())?;
            let record = db.record_for(&habit.id)?;
            let today = today_local();
            let viewed = match month {
                Some(spec) => parse_date_key(&format!("{spec}-01"))?,
                None => today,
            };
            let progress = month_progress(&record, habit.schedule(), viewed, today);
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        StatsAction::Graph { habit, range } => {
            let premium = StoredEntitlement::new(&db).is_subscription_active();
            if !premium {
                return Err("progress graphs are a premium feature".into());
            }
            let range = parse_range(&range)?;
            let habit = resolve_habit(&db, habit.as_deref())?;
            let record = db.record_for(&habit.id)?;
            let series = progress_series(&record, habit.schedule(), range, today_local());
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "habit": habit.id,
                    "series": series,
                    "trend": trend(&series),
                }))?
            );
        }
    }
    Ok(())
}

fn parse_range(spec: &str) -> Result<GraphRange, Box<dyn std::error::Error>> {
    match spec {
        "3m" => Ok(GraphRange::ThreeMonths),
        "6m" => Ok(GraphRange::SixMonths),
        "1y" => Ok(GraphRange::OneYear),
        "all" => Ok(GraphRange::All),
        other => Err(format!("invalid range '{other}': expected 3m, 6m, 1y or all").into()),
    }
}
