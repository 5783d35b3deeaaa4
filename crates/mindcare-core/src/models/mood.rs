use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Number of most recent entries the dashboard averages over.
pub const RECENT_WINDOW: usize = 7;

/// Self-reported mood on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (1..=5).contains(&value) {
            Ok(MoodLevel(value))
        } else {
            Err(CoreError::InvalidMood(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Sangat Sedih",
            2 => "Sedih",
            3 => "Biasa",
            4 => "Senang",
            _ => "Sangat Senang",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodLevel::new(value)
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: MoodLevel,
    pub note: String,
    pub created_at: jiff::Timestamp,
}

impl MoodEntry {
    pub fn record(user_id: Uuid, mood: MoodLevel, note: &str) -> Self {
        MoodEntry {
            id: Uuid::new_v4(),
            user_id,
            mood,
            note: note.trim().to_string(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Average of the newest `window` entries, rounded to one decimal.
///
/// `entries` must be ordered newest-first, as the dashboard query returns them.
pub fn average_recent_mood(entries: &[MoodEntry], window: usize) -> f64 {
    let recent = &entries[..entries.len().min(window)];
    if recent.is_empty() {
        return 0.0;
    }
    let sum: u32 = recent.iter().map(|e| u32::from(e.mood.value())).sum();
    let mean = f64::from(sum) / recent.len() as f64;
    (mean * 10.0).round() / 10.0
}
