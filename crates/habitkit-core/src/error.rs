//! Core error types for habitkit-core.
//!
//! This module defines the error hierarchy using thiserror. The engine
//! itself is total over typed inputs; malformed strings are rejected at
//! the parse boundary with a `ValidationError` rather than producing
//! wrong streak numbers downstream.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitkit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Purchase/entitlement errors
    #[error("Purchase error: {0}")]
    Purchase(#[from] PurchaseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// A stored row could not be decoded into a model value
    #[error("Corrupt row in {table}: {message}")]
    CorruptRow { table: String, message: String },
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::QueryFailed(err.to_string())
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse a configuration value
    #[error("Failed to parse configuration value: {0}")]
    ParseFailed(String),
}

/// Purchase/entitlement errors surfaced by subscription providers.
#[derive(Error, Debug)]
pub enum PurchaseError {
    /// The user cancelled the purchase flow
    #[error("Purchase cancelled")]
    Cancelled,

    /// A subscription is already active
    #[error("A premium subscription is already active")]
    AlreadyActive,

    /// The store or plan is unavailable
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backing store failed while recording the entitlement
    #[error("Entitlement store error: {0}")]
    Store(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A date key did not match the YYYY-MM-DD format
    #[error("Invalid date key '{0}': expected YYYY-MM-DD")]
    InvalidDateKey(String),

    /// A weekday index outside 0..=6
    #[error("Invalid weekday index {0}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(u8),

    /// A habit schedule with no tracking days at all
    #[error("Tracking schedule must include at least one weekday")]
    EmptyTrackingDays,

    /// Habit name missing or whitespace-only
    #[error("Habit name must not be empty")]
    EmptyName,

    /// Habit name over the length limit
    #[error("Habit name is {len} characters; the limit is {max}")]
    NameTooLong { len: usize, max: usize },

    /// Habit description over the length limit
    #[error("Habit description is {len} characters; the limit is {max}")]
    DescriptionTooLong { len: usize, max: usize },

    /// A color value outside the fixed palette
    #[error("Color '{0}' is not in the habit palette")]
    ColorNotInPalette(String),

    /// An unknown subscription plan identifier
    #[error("Unknown plan '{0}': expected 'monthly' or 'yearly'")]
    UnknownPlan(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
