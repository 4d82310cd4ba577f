//! Rolling history of generated passwords.
//!
//! Persisted under [`HISTORY_KEY`] as a JSON array, newest first, holding
//! at most [`HISTORY_CAPACITY`] entries. Every operation reads and rewrites
//! the whole array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

pub const HISTORY_KEY: &str = "passwordHistory";
pub const HISTORY_CAPACITY: usize = 5;

/// Characters shown before a long password is cut in [`HistoryEntry::display`].
const DISPLAY_LENGTH: usize = 15;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Stored password history is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Password as shown in the history list, cut to 15 characters.
    pub fn display(&self) -> String {
        if self.password.chars().count() > DISPLAY_LENGTH {
            let head: String = self.password.chars().take(DISPLAY_LENGTH).collect();
            format!("{}...", head)
        } else {
            self.password.clone()
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

pub struct HistoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Entries, newest first. An absent key is an empty history.
    pub fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match self.store.get(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(HistoryError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    /// Records a password with the current time.
    pub fn append(&self, password: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.append_at(password, Utc::now())
    }

    /// Records a password at the front, evicting the oldest entries past
    /// capacity. Returns the updated history.
    pub fn append_at(
        &self,
        password: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut history = self.list()?;
        history.insert(
            0,
            HistoryEntry {
                password: password.to_string(),
                timestamp,
            },
        );

        if history.len() > HISTORY_CAPACITY {
            #[cfg(feature = "tracing")]
            tracing::debug!("History full, evicting {} entries", history.len() - HISTORY_CAPACITY);
            history.truncate(HISTORY_CAPACITY);
        }

        self.save(&history)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "History entry added at {}",
            timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        );

        Ok(history)
    }

    /// Removes the entry at a 0-based, newest-first position.
    ///
    /// Returns the removed entry, or `None` (and writes nothing) when the
    /// index is out of range.
    pub fn remove(&self, index: usize) -> Result<Option<HistoryEntry>, HistoryError> {
        let mut history = self.list()?;
        if index >= history.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!("History index {} out of range ({} entries)", index, history.len());
            return Ok(None);
        }

        let removed = history.remove(index);
        self.save(&history)?;

        #[cfg(feature = "tracing")]
        tracing::info!("History entry {} removed", index);

        Ok(Some(removed))
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        self.save(&[])
    }

    fn save(&self, history: &[HistoryEntry]) -> Result<(), HistoryError> {
        let raw = serde_json::to_string(history).map_err(StorageError::from)?;
        self.store.set(HISTORY_KEY, &raw)?;
        Ok(())
    }
}
