//! SQLite-backed habit and completion storage.
//!
//! Provides persistent storage for:
//! - Habits and their weekly schedules
//! - Per-day completion statuses
//! - A key-value store for application state (selected habit, premium
//!   entitlement)

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::engine::date::{date_key, parse_date_key};
use crate::engine::TrackingSchedule;
use crate::error::{CoreError, DatabaseError};
use crate::habit::Habit;
use crate::onboarding;
use crate::record::{CompletionRecord, DayStatus};

const SELECTED_HABIT_KEY: &str = "selected_habit";

/// SQLite database for habits and completion records.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/habitkit/habitkit.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = super::data_dir()?.join("habitkit.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open a database at an explicit path. Used by tests and tooling.
    pub fn open_at(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn =
            Connection::open_in_memory().map_err(|source| DatabaseError::OpenFailed {
                path: PathBuf::from(":memory:"),
                source,
            })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS habits (
                id            TEXT PRIMARY KEY,
                name          TEXT NOT NULL,
                description   TEXT,
                color         TEXT NOT NULL,
                created_at    TEXT NOT NULL,
                tracking_days TEXT
            );

            CREATE TABLE IF NOT EXISTS completions (
                habit_id TEXT NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
                date     TEXT NOT NULL,
                status   TEXT NOT NULL,
                PRIMARY KEY (habit_id, date)
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_completions_habit_date
                ON completions(habit_id, date);",
        )?;
        Ok(())
    }

    // ---- habits ----

    /// Insert a new habit.
    pub fn insert_habit(&self, habit: &Habit) -> Result<(), DatabaseError> {
        let days = schedule_to_column(&habit.tracking_days)?;
        self.conn.execute(
            "INSERT INTO habits (id, name, description, color, created_at, tracking_days)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                habit.id,
                habit.name,
                habit.description,
                habit.color,
                habit.created_at.to_rfc3339(),
                days,
            ],
        )?;
        Ok(())
    }

    /// Overwrite an existing habit's mutable fields.
    pub fn update_habit(&self, habit: &Habit) -> Result<(), DatabaseError> {
        let days = schedule_to_column(&habit.tracking_days)?;
        self.conn.execute(
            "UPDATE habits SET name = ?2, description = ?3, color = ?4, tracking_days = ?5
             WHERE id = ?1",
            params![habit.id, habit.name, habit.description, habit.color, days],
        )?;
        Ok(())
    }

    /// Delete a habit and, via cascade, its completion record. Returns
    /// whether a row was removed.
    pub fn delete_habit(&self, id: &str) -> Result<bool, DatabaseError> {
        let n = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![id])?;
        if self.selected_habit()?.as_deref() == Some(id) {
            self.kv_delete(SELECTED_HABIT_KEY)?;
        }
        Ok(n > 0)
    }

    pub fn get_habit(&self, id: &str) -> Result<Option<Habit>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, color, created_at, tracking_days
             FROM habits WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], habit_row)?;
        match rows.next() {
            Some(row) => Ok(Some(habit_from_row(row?)?)),
            None => Ok(None),
        }
    }

    /// All habits, oldest first.
    pub fn list_habits(&self) -> Result<Vec<Habit>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, color, created_at, tracking_days
             FROM habits ORDER BY created_at, id",
        )?;
        let rows = stmt.query_map([], habit_row)?;
        let mut habits = Vec::new();
        for row in rows {
            habits.push(habit_from_row(row?)?);
        }
        Ok(habits)
    }

    pub fn habit_count(&self) -> Result<usize, DatabaseError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    // ---- completions ----

    /// Load the full completion record for a habit.
    pub fn record_for(&self, habit_id: &str) -> Result<CompletionRecord, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, status FROM completions WHERE habit_id = ?1")?;
        let rows = stmt.query_map(params![habit_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut record = CompletionRecord::new();
        for row in rows {
            let (date, status) = row?;
            let date = parse_date_key(&date).map_err(|_| DatabaseError::CorruptRow {
                table: "completions".into(),
                message: format!("malformed date key '{date}'"),
            })?;
            let status = DayStatus::parse(&status).ok_or_else(|| DatabaseError::CorruptRow {
                table: "completions".into(),
                message: format!("unknown status tag '{status}'"),
            })?;
            record.set_status(date, status);
        }
        Ok(record)
    }

    /// Set a day's status for a habit.
    pub fn set_status(
        &self,
        habit_id: &str,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO completions (habit_id, date, status) VALUES (?1, ?2, ?3)",
            params![habit_id, date_key(date), status.as_str()],
        )?;
        Ok(())
    }

    /// Remove a day's status, returning it to the implicit "none".
    pub fn clear_status(&self, habit_id: &str, date: NaiveDate) -> Result<(), DatabaseError> {
        self.conn.execute(
            "DELETE FROM completions WHERE habit_id = ?1 AND date = ?2",
            params![habit_id, date_key(date)],
        )?;
        Ok(())
    }

    /// Toggle a day between completed and none. Returns the new completed
    /// state.
    pub fn toggle_completed(
        &self,
        habit_id: &str,
        date: NaiveDate,
    ) -> Result<bool, DatabaseError> {
        let record = self.record_for(habit_id)?;
        if record.is_completed(date) {
            self.clear_status(habit_id, date)?;
            Ok(false)
        } else {
            self.set_status(habit_id, date, DayStatus::Completed)?;
            Ok(true)
        }
    }

    /// Remove every checkmark from every habit. Returns how many rows
    /// were deleted.
    pub fn clear_all_marks(&self) -> Result<usize, DatabaseError> {
        let n = self.conn.execute("DELETE FROM completions", [])?;
        Ok(n)
    }

    // ---- selection & kv ----

    pub fn selected_habit(&self) -> Result<Option<String>, DatabaseError> {
        self.kv_get(SELECTED_HABIT_KEY)
    }

    pub fn set_selected_habit(&self, id: &str) -> Result<(), DatabaseError> {
        self.kv_set(SELECTED_HABIT_KEY, id)
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ---- bootstrap ----

    /// Resolve the habit the app should act on, seeding the starter habit
    /// with sample data on a fresh install.
    pub fn bootstrap(&self, today: NaiveDate) -> Result<Habit, CoreError> {
        if let Some(id) = self.selected_habit()? {
            if let Some(habit) = self.get_habit(&id)? {
                return Ok(habit);
            }
            // Selection points at a deleted habit; fall through.
            self.kv_delete(SELECTED_HABIT_KEY)?;
        }

        if let Some(first) = self.list_habits()?.into_iter().next() {
            self.set_selected_habit(&first.id)?;
            return Ok(first);
        }

        let habit = onboarding::starter_habit()?;
        self.insert_habit(&habit)?;
        for date in onboarding::seed_starter_record(today).completed_dates() {
            self.set_status(&habit.id, date, DayStatus::Completed)?;
        }
        self.set_selected_habit(&habit.id)?;
        Ok(habit)
    }
}

type HabitRow = (
    String,
    String,
    Option<String>,
    String,
    String,
    Option<String>,
);

fn habit_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HabitRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn habit_from_row(row: HabitRow) -> Result<Habit, DatabaseError> {
    let (id, name, description, color, created_at, tracking_days) = row;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| DatabaseError::CorruptRow {
            table: "habits".into(),
            message: format!("bad created_at: {e}"),
        })?
        .with_timezone(&Utc);
    let tracking_days = match tracking_days {
        None => TrackingSchedule::every_day(),
        Some(json) => serde_json::from_str(&json).map_err(|e| DatabaseError::CorruptRow {
            table: "habits".into(),
            message: format!("bad tracking_days: {e}"),
        })?,
    };
    Ok(Habit {
        id,
        name,
        description,
        color,
        created_at,
        tracking_days,
    })
}

fn schedule_to_column(schedule: &TrackingSchedule) -> Result<Option<String>, DatabaseError> {
    match schedule.days() {
        None => Ok(None),
        Some(_) => serde_json::to_string(schedule)
            .map(Some)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string())),
    }
}
