use std::collections::HashMap;
use std::path::Path;

use chrono::Local;
use habitkit_core::export::export_summary;
use habitkit_core::premium::{StoredEntitlement, SubscriptionProvider};
use habitkit_core::Database;

pub fn run(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let premium = StoredEntitlement::new(&db).is_subscription_active();
    if !premium {
        return Err("data export is a premium feature".into());
    }

    let habits = db.list_habits()?;
    let mut records = HashMap::new();
    for habit in &habits {
        records.insert(habit.id.clone(), db.record_for(&habit.id)?);
    }

    let text = export_summary(&habits, &records, premium, Local::now());
    std::fs::write(out, &text)?;
    println!("exported {} habits to {}", habits.len(), out.display());
    Ok(())
}
