use log::warn;
use web_sys::{Storage, Window};

use crate::storage::{MemoryStore, PreferenceStore};

/// `localStorage` when the browser allows it, memory otherwise.
pub enum SiteStore {
    Browser(Storage),
    Memory(MemoryStore),
}

impl SiteStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => SiteStore::Browser(storage),
            Ok(None) => {
                warn!("localStorage unavailable, locale preference will not persist");
                SiteStore::Memory(MemoryStore::default())
            }
            Err(e) => {
                warn!("localStorage blocked ({:?}), locale preference will not persist", e);
                SiteStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for SiteStore {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            SiteStore::Browser(storage) => storage.get_item(key).ok().flatten(),
            SiteStore::Memory(memory) => memory.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        match self {
            SiteStore::Browser(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    warn!("Failed to save {}: {:?}", key, e);
                }
            }
            SiteStore::Memory(memory) => memory.save(key, value),
        }
    }
}
