use chrono::NaiveDate;
use habitkit_core::engine::{parse_date_key, today_local};
use habitkit_core::{Database, Habit};

/// Resolve the habit a command acts on: an explicit id, or the selected
/// habit (bootstrapping the starter habit on a fresh install).
pub fn resolve_habit(
    db: &Database,
    id: Option<&str>,
) -> Result<Habit, Box<dyn std::error::Error>> {
    match id {
        Some(id) => db
            .get_habit(id)?
            .ok_or_else(|| format!("no habit with id {id}").into()),
        None => Ok(db.bootstrap(today_local())?),
    }
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn resolve_date(arg: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match arg {
        Some(key) => Ok(parse_date_key(key)?),
        None => Ok(today_local()),
    }
}

/// Parse a comma-separated weekday list like "1,3,5" (0 = Sunday).
pub fn parse_days(spec: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    spec.split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid weekday '{part}': expected 0-6").into())
        })
        .collect()
}
