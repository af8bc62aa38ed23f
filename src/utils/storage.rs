//! localStorage-backed [`StateStore`] implementation.
//!
//! The browser back end for the persistence layer. All reads and writes go
//! through `window.localStorage` synchronously; each logical store is a
//! single key replaced atomically on save.

use crate::core::error::StorageError;
use crate::core::persist::StateStore;

use super::dom;

/// [`StateStore`] backed by the browser's localStorage.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl StateStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = dom::local_storage()?;
        storage.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed)
    }
}

// Runs under `wasm-pack test --headless` against real localStorage.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::core::persist::{self, StateStore};
    use crate::models::Calculators;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trips_through_local_storage() {
        let store = LocalStore;
        let key = "hearthplan_test_round_trip";

        let mut calculators = Calculators::default();
        calculators.down_payment.property_price = "500000".to_string();
        persist::save(&store, key, &calculators).unwrap();

        let loaded: Calculators = persist::load(&store, key);
        assert_eq!(loaded, calculators);

        store.remove(key).unwrap();
        assert!(store.read(key).is_none());
    }

    #[wasm_bindgen_test]
    fn malformed_record_falls_back_to_default() {
        let store = LocalStore;
        let key = "hearthplan_test_malformed";

        store.write(key, "{not json").unwrap();
        let loaded: Calculators = persist::load(&store, key);
        assert_eq!(loaded, Calculators::default());

        store.remove(key).unwrap();
    }
}
