use serde::{Deserialize, Serialize};

use crate::config::{PERSISTENCE, RECENCY};
use crate::store::SharedStore;

/// One remembered identifier, shaped like an autocomplete suggestion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecencyEntry {
    pub value: String,
    pub label: String,
}

impl RecencyEntry {
    pub fn new(identifier: &str) -> Self {
        Self {
            value: identifier.to_string(),
            label: identifier.to_string(),
        }
    }
}

/// Most-recently-used-first list of queried identifiers, unique by `value`.
#[derive(Debug, Clone)]
pub struct RecencyCache {
    store: SharedStore,
    key: String,
    max_entries: usize,
}

impl RecencyCache {
    /// `max_entries` is raised to 1 so the latest identifier is always kept.
    pub fn new(store: SharedStore, key: impl Into<String>, max_entries: usize) -> Self {
        Self {
            store,
            key: key.into(),
            max_entries: max_entries.max(1),
        }
    }

    /// Cache under the default key and cap.
    pub fn with_defaults(store: SharedStore) -> Self {
        Self::new(store, PERSISTENCE.keys.recent_addresses, RECENCY.max_entries)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Stored list; empty when missing or malformed.
    pub fn load(&self) -> Vec<RecencyEntry> {
        self.store
            .get_json::<Vec<RecencyEntry>>(&self.key)
            .unwrap_or_default()
    }

    /// Moves `identifier` to the front, persists and returns the new list.
    pub fn remember(&self, identifier: &str) -> Vec<RecencyEntry> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return self.load();
        }

        let updated: Vec<RecencyEntry> = std::iter::once(RecencyEntry::new(identifier))
            .chain(self.load().into_iter().filter(|e| e.value != identifier))
            .take(self.max_entries)
            .collect();

        self.store.set_json(&self.key, &updated);
        updated
    }

    pub fn values(&self) -> Vec<String> {
        self.load().into_iter().map(|e| e.value).collect()
    }
}
