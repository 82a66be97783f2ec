//! The key-value persistence surface.
//!
//! Stores serialize each dataset as JSON under a single named key. Any
//! key-value implementation works: the in-memory [`MemoryStore`] here, a
//! file-backed store, or (in the original storefront) browser local
//! storage. Reads never fail - absence means "empty" and corruption is
//! recovered by the caller's fallback - while writes surface real errors.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use artstop_core::ProductError;

/// Store-level failures.
///
/// Read-path corruption is deliberately absent here: it is logged and
/// recovered with the empty/seed default rather than propagated.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Value could not be serialized for persistence.
    #[error("failed to serialize value for key `{key}`")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying key-value surface rejected the write.
    #[error("failed to persist key `{key}`: {message}")]
    Persist { key: String, message: String },

    /// A product failed validation on its way into the catalog.
    #[error(transparent)]
    InvalidProduct(#[from] ProductError),

    /// A store operation was invoked on a store with the wrong role.
    #[error("operation requires the {expected} store")]
    RoleMismatch { expected: &'static str },
}

/// Synchronous key-value persistence surface.
///
/// A missing key is an empty dataset, never an error. Implementations are
/// expected to be cheap to clone (share their backing state) so multiple
/// stores can sit on the same surface.
pub trait KeyValue {
    /// Read the raw value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the raw value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persist`] when the surface cannot store the
    /// value (e.g., an I/O failure in a file-backed implementation).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persist`] when the surface cannot apply the
    /// deletion.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory key-value store.
///
/// Clones share the same backing map, so a cart store and a wishlist store
/// handed clones of one `MemoryStore` see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().remove(key);
        Ok(())
    }
}

/// Read and deserialize a key, treating corrupt data as absent.
///
/// Corruption is logged with the key and parse error so operators can
/// diagnose it, but the caller only ever sees `None`.
pub(crate) fn read_json<T: DeserializeOwned>(kv: &impl KeyValue, key: &str) -> Option<T> {
    let raw = kv.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(key, %error, "corrupt persisted value, falling back to default");
            None
        }
    }
}

/// Serialize and persist a value under a key.
pub(crate) fn write_json<T: Serialize>(
    kv: &impl KeyValue,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    kv.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let kv = MemoryStore::new();
        assert_eq!(kv.get("missing"), None);

        kv.set("key", "value").unwrap();
        assert_eq!(kv.get("key").as_deref(), Some("value"));

        kv.remove("key").unwrap();
        assert_eq!(kv.get("key"), None);
        // Removing again is a no-op.
        kv.remove("key").unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let kv = MemoryStore::new();
        let other = kv.clone();
        kv.set("shared", "1").unwrap();
        assert_eq!(other.get("shared").as_deref(), Some("1"));
    }

    #[test]
    fn test_read_json_corrupt_is_none() {
        let kv = MemoryStore::new();
        kv.set("nums", "not json at all {{{").unwrap();
        let read: Option<Vec<i32>> = read_json(&kv, "nums");
        assert_eq!(read, None);
    }

    #[test]
    fn test_write_then_read_json() {
        let kv = MemoryStore::new();
        write_json(&kv, "nums", &vec![1, 2, 3]).unwrap();
        let read: Option<Vec<i32>> = read_json(&kv, "nums");
        assert_eq!(read, Some(vec![1, 2, 3]));
    }
}
