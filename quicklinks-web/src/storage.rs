//! `window.localStorage` backend for the Link Store and theme flag

use quicklinks_common::{KeyValueStorage, StorageError};
use tracing::warn;

/// Handle to the page's local storage.
///
/// When storage is unavailable (private mode, sandboxed iframe) reads come
/// back empty, so the store falls back to its defaults, and writes fail with
/// `StorageError::Unavailable`.
#[derive(Clone)]
pub struct LocalStorage {
    storage: Option<web_sys_x::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys_x::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is not available, changes will not be saved");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}
