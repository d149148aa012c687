use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use super::{KeyValueStore, StoreResult};
use crate::models::journal::JournalEntry;
use crate::models::mood::MoodEntry;
use crate::models::profile::{Theme, UserProfile};
use crate::models::stats::WellnessStats;

pub const USER_KEY: &str = "user";
pub const JOURNAL_KEY: &str = "journal-entries";
pub const MOOD_HISTORY_KEY: &str = "mood-history";
pub const STATS_KEY: &str = "wellness-stats";
pub const GRADIENT_FROM_KEY: &str = "gradient-from";
pub const GRADIENT_TO_KEY: &str = "gradient-to";

/// Typed access to the wellness records kept in a [`KeyValueStore`].
///
/// Unparseable records are logged and read back as their empty default.
#[derive(Clone)]
pub struct WellnessRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl WellnessRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Serialises read-modify-write sequences spanning several keys.
    pub async fn exclusive(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    async fn load<T>(&self, key: &str) -> StoreResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupted record, falling back to default");
                Ok(T::default())
            }
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).await
    }

    // --- Profile ---

    pub async fn profile(&self) -> StoreResult<Option<UserProfile>> {
        self.load(USER_KEY).await
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        self.save(USER_KEY, profile).await
    }

    pub async fn clear_profile(&self) -> StoreResult<()> {
        self.store.remove(USER_KEY).await
    }

    // --- Mood history ---

    pub async fn mood_history(&self) -> StoreResult<Vec<MoodEntry>> {
        self.load(MOOD_HISTORY_KEY).await
    }

    pub async fn save_mood_history(&self, history: &[MoodEntry]) -> StoreResult<()> {
        self.save(MOOD_HISTORY_KEY, &history).await
    }

    // --- Journal ---

    /// Newest first.
    pub async fn journal_entries(&self) -> StoreResult<Vec<JournalEntry>> {
        self.load(JOURNAL_KEY).await
    }

    pub async fn save_journal_entries(&self, entries: &[JournalEntry]) -> StoreResult<()> {
        self.save(JOURNAL_KEY, &entries).await
    }

    // --- Gamification ---

    pub async fn wellness_stats(&self) -> StoreResult<WellnessStats> {
        self.load(STATS_KEY).await
    }

    pub async fn save_wellness_stats(&self, stats: &WellnessStats) -> StoreResult<()> {
        self.save(STATS_KEY, stats).await
    }

    // --- Theme ---

    /// Theme strings are stored raw; a theme exists only when both halves do.
    pub async fn theme(&self) -> StoreResult<Option<Theme>> {
        let from = self.store.get(GRADIENT_FROM_KEY).await?;
        let to = self.store.get(GRADIENT_TO_KEY).await?;
        Ok(match (from, to) {
            (Some(from), Some(to)) => Some(Theme { from, to }),
            _ => None,
        })
    }

    pub async fn save_theme(&self, theme: &Theme) -> StoreResult<()> {
        self.store.set(GRADIENT_FROM_KEY, &theme.from).await?;
        self.store.set(GRADIENT_TO_KEY, &theme.to).await
    }
}
