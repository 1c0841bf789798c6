use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

use crate::codec::{self, DecodeError, Record};
use crate::records::ALL_KEYS;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("could not decode {key}: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: DecodeError,
    },
}

impl StorageError {
    /// True when the stored value exists but is unreadable.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, StorageError::Decode { .. })
    }
}

/// Raw string key/value persistence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and throwaway runs.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Typed access to the key/value backend.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Load and decode record `T`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Decode` if a value is present but fails
    /// validation, or a backend error.
    pub async fn load<T: Record>(&self) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.kv.get(T::KEY).await? else {
            return Ok(None);
        };
        codec::decode::<T>(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: T::KEY,
                source,
            })
    }

    /// Encode and write record `T`, replacing the previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn save<T: Record>(&self, value: &T) -> Result<(), StorageError> {
        let raw =
            codec::encode(value).map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set(T::KEY, &raw).await?;
        debug!(key = T::KEY, bytes = raw.len(), "record saved");
        Ok(())
    }

    /// Remove record `T`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear<T: Record>(&self) -> Result<(), StorageError> {
        self.kv.remove(T::KEY).await?;
        debug!(key = T::KEY, "record removed");
        Ok(())
    }

    /// Remove every key the app owns.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on the first failed removal.
    pub async fn reset(&self) -> Result<(), StorageError> {
        for key in ALL_KEYS {
            self.kv.remove(key).await?;
        }
        debug!("all records removed");
        Ok(())
    }
}
