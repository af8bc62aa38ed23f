//! Persistence layer for the application's logical stores.
//!
//! Each store is a single JSON blob under a fixed key, read and replaced
//! wholesale. The [`StateStore`] trait isolates the storage back end so the
//! data layer can be exercised in unit tests without a browser; the browser
//! implementation lives in [`crate::utils::storage`].

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::StorageError;
use crate::utils::log;

/// A key-value back end for persisted application state.
///
/// Implementations: [`crate::utils::storage::LocalStore`] (localStorage)
/// and [`MemoryStore`] for tests.
pub trait StateStore {
    /// Read the raw string under `key`, if present.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a record from `store`, falling back to `T::default()` when the key
/// is absent or holds malformed JSON.
///
/// Malformed JSON is logged and discarded rather than surfaced to the user.
pub fn load<T>(store: &impl StateStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.read(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn(&format!("discarding malformed record under {key}: {err}"));
            T::default()
        }
    }
}

/// Serialize `value` and replace the blob under `key`.
pub fn save<T: Serialize>(store: &impl StateStore, key: &str, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|_| StorageError::SerializationFailed)?;
    store.write(key, &json)
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory [`StateStore`] used by unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Record {
        name: String,
        amount: f64,
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::default();
        let record = Record {
            name: "savings".to_string(),
            amount: 1250.5,
        };

        save(&store, "test_key", &record).unwrap();
        let loaded: Record = load(&store, "test_key");
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let store = MemoryStore::default();
        let loaded: Record = load(&store, "absent");
        assert_eq!(loaded, Record::default());
    }

    #[test]
    fn test_malformed_json_yields_default() {
        let store = MemoryStore::default();
        store.write("bad", "{not json").unwrap();

        let loaded: Record = load(&store, "bad");
        assert_eq!(loaded, Record::default());
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let store = MemoryStore::default();
        save(
            &store,
            "k",
            &Record {
                name: "first".to_string(),
                amount: 1.0,
            },
        )
        .unwrap();
        save(
            &store,
            "k",
            &Record {
                name: "second".to_string(),
                amount: 2.0,
            },
        )
        .unwrap();

        let loaded: Record = load(&store, "k");
        assert_eq!(loaded.name, "second");
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::default();
        save(
            &store,
            "k",
            &Record {
                name: "x".to_string(),
                amount: 1.0,
            },
        )
        .unwrap();
        store.remove("k").unwrap();
        assert!(store.read("k").is_none());
    }
}
