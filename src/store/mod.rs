//! Client-local key-value persistence.
//!
//! The dashboard keeps a handful of strings (cooldown stamps, the recent
//! address list) in a durable string-keyed store. Everything in the engine
//! talks to it through [`SharedStore`], so gates for different pages can share
//! one backing store and tests can swap in a [`MemoryStore`].

pub mod eframe_bridge;
pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_STORE_SERDE;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Durable, synchronous, string-keyed store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// Cloneable handle over one boxed store.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Box<dyn KeyValueStore + Send>>>,
}

impl SharedStore {
    pub fn new(store: impl KeyValueStore + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn KeyValueStore + Send>> {
        // A panic mid-write leaves at worst a stale string behind
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.lock().get(key);

        #[cfg(debug_assertions)]
        if PRINT_STORE_SERDE {
            log::info!("[store] get {key} -> {:?}", value);
        }
        value
    }

    pub fn set(&self, key: &str, value: String) {
        #[cfg(debug_assertions)]
        if PRINT_STORE_SERDE {
            log::info!("[store] set {key} <- {value}");
        }
        self.lock().set(key, value);
    }

    /// Reads and decodes a JSON value. Missing or malformed data is `None`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring malformed value under '{key}': {e}");
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, raw),
            Err(e) => log::error!("Failed to serialize value for '{key}': {e}"),
        }
    }
}

impl std::fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore").finish_non_exhaustive()
    }
}
