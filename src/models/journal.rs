use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMood {
    Happy,
    Neutral,
    Sad,
    Anxious,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mood: JournalMood,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(mood: JournalMood, content: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            mood,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JournalMoodCounts {
    pub happy: usize,
    pub neutral: usize,
    pub sad: usize,
    pub anxious: usize,
}

impl JournalMoodCounts {
    pub fn tally(entries: &[JournalEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut counts, entry| {
                match entry.mood {
                    JournalMood::Happy => counts.happy += 1,
                    JournalMood::Neutral => counts.neutral += 1,
                    JournalMood::Sad => counts.sad += 1,
                    JournalMood::Anxious => counts.anxious += 1,
                }
                counts
            })
    }
}
