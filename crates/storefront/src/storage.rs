//! Write-through persistent key-value storage.
//!
//! The browser profile's `localStorage` reduced to the three keys the
//! storefront actually persists: the user profile, the cart snapshot, and
//! the auth token. [`FileStorage`] keeps the whole keyspace as one JSON
//! object on disk and rewrites it on every mutation; [`MemoryStorage`] is
//! the ephemeral implementation used by tests.
//!
//! Reads never fail: a missing or malformed storage file is an empty
//! keyspace, not an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Keys under which the storefront persists its state.
pub mod keys {
    /// Serialized [`UserProfile`](crate::models::UserProfile) of the
    /// logged-in user.
    pub const USER_PROFILE: &str = "user";

    /// Serialized array of cart lines.
    pub const CART_ITEMS: &str = "cartItems";

    /// Opaque bearer token issued by the backend on login.
    pub const AUTH_TOKEN: &str = "token";
}

/// Errors that can occur when writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the storage file failed.
    #[error("failed to write storage file {path}: {source}")]
    Write {
        /// Path of the storage file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing the keyspace failed.
    #[error("failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Abstraction over the persistent key-value store.
///
/// The store is injected into [`CartStore`](crate::store::CartStore) so
/// tests can run against [`MemoryStorage`] while the application uses
/// [`FileStorage`].
pub trait StorageBackend {
    /// Read a value. Absent keys return `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value through to the backing medium.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting the keyspace fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting the keyspace fails.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries.
    #[must_use]
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: one JSON object per profile, rewritten on every
/// mutation.
///
/// Mutations are synchronous write-through; there is no batching window
/// between an in-memory change and its persisted snapshot.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open storage at `path`, loading any existing contents.
    ///
    /// A missing file starts an empty keyspace. A malformed file is logged
    /// and treated as empty; it will be overwritten by the next mutation.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Malformed storage file, starting with empty keyspace"
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, entries }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, raw).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            return self.flush();
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("medikart-storage-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn test_memory_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("user"), None);

        storage.set("user", "{\"name\":\"Asha\"}").unwrap();
        assert_eq!(storage.get("user").as_deref(), Some("{\"name\":\"Asha\"}"));

        storage.remove("user").unwrap();
        assert_eq!(storage.get("user"), None);
        // Removing again is a no-op.
        storage.remove("user").unwrap();
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = temp_path("roundtrip");
        {
            let mut storage = FileStorage::open(&path);
            storage.set(keys::AUTH_TOKEN, "tok-123").unwrap();
            storage.set(keys::CART_ITEMS, "[]").unwrap();
        }

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get(keys::AUTH_TOKEN).as_deref(), Some("tok-123"));
        assert_eq!(reopened.get(keys::CART_ITEMS).as_deref(), Some("[]"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let storage = FileStorage::open(temp_path("missing"));
        assert_eq!(storage.get(keys::USER_PROFILE), None);
    }

    #[test]
    fn test_file_storage_malformed_file_is_empty() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{{{not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get(keys::CART_ITEMS), None);

        std::fs::remove_file(&path).unwrap();
    }
}
