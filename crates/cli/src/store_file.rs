//! JSON-file-backed key-value store.
//!
//! The storefront persists to browser local storage; the CLI persists the
//! same named slots to a single JSON file (a string-to-string map). Every
//! operation reads or rewrites the whole file - fine for a dataset this
//! size, and it keeps the store dependency-free.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use artstop_store::{KeyValue, StoreError};

/// File-backed [`KeyValue`] implementation.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the backing map. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read store file");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "corrupt store file, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn save(&self, map: &BTreeMap<String, String>, key: &str) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(map).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        fs::write(&self.path, raw).map_err(|error| StoreError::Persist {
            key: key.to_string(),
            message: error.to_string(),
        })
    }
}

impl KeyValue for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.load();
        map.insert(key.to_string(), value.to_string());
        self.save(&map, key)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.save(&map, key)?;
        }
        Ok(())
    }
}
