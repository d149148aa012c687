use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

pub const MIN_MOOD: u8 = 0;
pub const MAX_MOOD: u8 = 10;

/// A single 0–10 self-rating. Mood history is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: u8,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl MoodEntry {
    pub fn at<Tz: TimeZone>(mood: u8, at: &DateTime<Tz>) -> Self {
        Self {
            date: at.date_naive(),
            mood,
            timestamp: at.timestamp_millis(),
        }
    }
}

/// Calendar day on the machine running the service.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
