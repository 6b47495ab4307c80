//! Browser LocalStorage backend

use web_sys::Storage;

use crate::persistence::KeyValueStore;

/// LocalStorage wrapper; behaves as an always-empty store when storage is
/// unavailable (private mode, disabled cookies)
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - progress will not be saved");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write '{}' to LocalStorage", key);
            }
        }
    }
}
