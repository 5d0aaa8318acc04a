//! localStorage-backed preferences

use folio_fx::{FxError, MemoryStore, PreferenceStore};
use web_sys::{Storage, Window};

use crate::util::describe;

/// Preference store over `window.localStorage`
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// `None` when storage is unavailable (privacy mode, sandboxed frames)
    pub fn open(window: &Window) -> Option<Self> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|storage| Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FxError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| FxError::Storage(describe(&e)))
    }
}

/// localStorage if available, otherwise an in-memory store for this page view
pub fn open_preferences(window: &Window) -> Box<dyn PreferenceStore> {
    match LocalStore::open(window) {
        Some(store) => Box::new(store),
        None => Box::new(MemoryStore::new()),
    }
}
