//! # HabitKit Core Library
//!
//! This library provides the core business logic for the HabitKit habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI shell being a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Engine**: Pure streak/progress calculations over immutable
//!   snapshots of a habit's completion record and weekly schedule
//! - **Storage**: SQLite-based habit/completion storage and TOML-based
//!   configuration
//! - **Premium**: Capability interface over the platform subscription
//!   store, reduced to "is a subscription currently active"
//!
//! ## Key Components
//!
//! - [`engine::current_streak`] / [`engine::longest_streak`]: the streak
//!   calculators
//! - [`engine::month_progress`]: month-scoped completion percentages
//! - [`Database`]: habit and completion persistence
//! - [`Config`]: application configuration management
//! - [`SubscriptionProvider`]: trait for premium entitlement sources

pub mod engine;
pub mod error;
pub mod export;
pub mod habit;
pub mod onboarding;
pub mod premium;
pub mod record;
pub mod storage;

pub use engine::{
    current_streak, longest_streak, month_progress, progress_series, streak_quote, trend,
    GraphRange, MonthProgress, SeriesPoint, TrackingSchedule, Trend,
};
pub use error::{
    ConfigError, CoreError, DatabaseError, PurchaseError, Result, ValidationError,
};
pub use export::export_summary;
pub use habit::Habit;
pub use premium::{
    can_add_habit, Entitlement, PlanId, StoredEntitlement, SubscriptionProvider,
};
pub use record::{CompletionRecord, DayStatus};
pub use storage::{Config, Database};
