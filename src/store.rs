//! Client-local durable key-value store.
//!
//! The viewer persists exactly one value today (the theme preference),
//! but the store is a plain string-to-string map so other UI settings
//! can share it. `SledStore` is the durable backend; `MemoryStore` is
//! used in tests and as the fallback when the data directory can't be
//! opened.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] sled::Error),

    #[error("stored value for '{key}' is not valid UTF-8")]
    Encoding { key: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal durable key-value contract.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// sled-backed store. Every `set` is flushed before returning.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open or create the store in `dir`.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        let db = sled::open(dir)?;
        Ok(Self { db })
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| StoreError::Encoding { key: key.to_string() }),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }
}

/// Volatile store. Values live as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open the durable store, falling back to memory if that fails.
///
/// The viewer keeps working either way; only persistence across
/// sessions is lost.
pub fn open_or_memory(dir: &Path) -> Box<dyn KeyValueStore> {
    match SledStore::open(dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("store at {} unavailable, preferences will not persist: {e}", dir.display());
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".into()));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("light".into()));
    }

    #[test]
    fn sled_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state");
        {
            let mut store = SledStore::open(&path).unwrap();
            store.set("theme", "dark").unwrap();
        }
        let store = SledStore::open(&path).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".into()));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn open_or_memory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the database directory should go.
        let blocker = dir.path().join("state");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let mut store = open_or_memory(&blocker);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".into()));
    }
}
