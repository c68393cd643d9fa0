//! Habit model and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::TrackingSchedule;
use crate::error::ValidationError;

/// Maximum habit name length, in characters.
pub const NAME_MAX_CHARS: usize = 30;
/// Maximum habit description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 100;
/// Color every new habit starts with. The rest of the palette is a
/// premium perk.
pub const DEFAULT_COLOR: &str = "#4CAF50";

/// The fixed habit color palette, as (name, hex) pairs.
pub const HABIT_COLORS: [(&str, &str); 8] = [
    ("Green", "#4CAF50"),
    ("Blue", "#2196F3"),
    ("Purple", "#9C27B0"),
    ("Orange", "#FF9800"),
    ("Red", "#F44336"),
    ("Teal", "#009688"),
    ("Pink", "#E91E63"),
    ("Indigo", "#3F51B5"),
];

/// Look up a palette entry by hex value (case-insensitive).
pub fn palette_color(value: &str) -> Option<&'static str> {
    HABIT_COLORS
        .iter()
        .map(|(_, hex)| *hex)
        .find(|hex| hex.eq_ignore_ascii_case(value))
}

/// A user-defined habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Opaque identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Hex display color from [`HABIT_COLORS`].
    pub color: String,
    pub created_at: DateTime<Utc>,
    /// Weekdays the habit is due; legacy habits track every day.
    #[serde(default)]
    pub tracking_days: TrackingSchedule,
}

impl Habit {
    /// Create a habit with a fresh id, the default color, and no
    /// description.
    pub fn new(name: &str, schedule: TrackingSchedule) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: validated_name(name)?,
            description: None,
            color: DEFAULT_COLOR.to_string(),
            created_at: Utc::now(),
            tracking_days: schedule,
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validated_name(name)?;
        Ok(())
    }

    /// Set or clear the description; a blank string clears it.
    pub fn set_description(&mut self, text: &str) -> Result<(), ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            self.description = None;
            return Ok(());
        }
        let len = text.chars().count();
        if len > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong {
                len,
                max: DESCRIPTION_MAX_CHARS,
            });
        }
        self.description = Some(text.to_string());
        Ok(())
    }

    /// Set the display color; must be a palette value.
    pub fn set_color(&mut self, color: &str) -> Result<(), ValidationError> {
        match palette_color(color) {
            Some(hex) => {
                self.color = hex.to_string();
                Ok(())
            }
            None => Err(ValidationError::ColorNotInPalette(color.to_string())),
        }
    }

    pub fn set_tracking_days(&mut self, schedule: TrackingSchedule) {
        self.tracking_days = schedule;
    }

    pub fn schedule(&self) -> &TrackingSchedule {
        &self.tracking_days
    }
}

fn validated_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong {
            len,
            max: NAME_MAX_CHARS,
        });
    }
    Ok(name.to_string())
}
