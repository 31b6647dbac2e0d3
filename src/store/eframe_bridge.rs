//! Bridges the dashboard's persisted keys to an eframe [`Storage`].
//!
//! eframe hands the app its storage only at creation time and inside
//! `App::save`, so the engine works against a [`SharedStore`] and these
//! helpers copy the known keys across at those two points.

use eframe::Storage;

use super::SharedStore;

/// Copies `keys` from the eframe storage into `store`. Keys eframe does not
/// have are left untouched.
pub fn hydrate_from_eframe(store: &SharedStore, storage: &dyn Storage, keys: &[&str]) -> usize {
    let mut copied = 0;
    for key in keys {
        if let Some(value) = storage.get_string(key) {
            store.set(key, value);
            copied += 1;
        }
    }
    copied
}

/// Writes `keys` from `store` back to the eframe storage.
pub fn persist_to_eframe(store: &SharedStore, storage: &mut dyn Storage, keys: &[&str]) {
    for key in keys {
        if let Some(value) = store.get(key) {
            storage.set_string(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStorage(HashMap<String, String>);

    impl Storage for FakeStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn round_trip_known_keys_only() {
        let mut storage = FakeStorage::default();
        storage.set_string("lastClaimRewardsFetchTime", "42".to_string());
        storage.set_string("unrelated", "x".to_string());

        let store = SharedStore::in_memory();
        let copied = hydrate_from_eframe(
            &store,
            &storage,
            &["lastClaimRewardsFetchTime", "recentAddresses"],
        );
        assert_eq!(copied, 1);
        assert_eq!(store.get("lastClaimRewardsFetchTime").as_deref(), Some("42"));
        assert!(store.get("unrelated").is_none());

        store.set("recentAddresses", "[]".to_string());
        let mut out = FakeStorage::default();
        persist_to_eframe(&store, &mut out, &["recentAddresses", "lastClaimRewardsFetchTime"]);
        assert_eq!(out.get_string("recentAddresses").as_deref(), Some("[]"));
        assert_eq!(out.get_string("lastClaimRewardsFetchTime").as_deref(), Some("42"));
    }
}
