//! Process-local user storage.
//!
//! Used as the test double for the storage port and as the fallback backend
//! when no Redis URL is configured. Records vanish with the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserStorage, UserStorageError};

/// `HashMap`-backed [`UserStorage`].
///
/// # Examples
/// ```
/// use user_service::domain::ports::UserStorage;
/// use user_service::outbound::kv::InMemoryUserStorage;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let storage = InMemoryUserStorage::new();
/// storage.store("42", "alice").await.expect("store");
/// assert_eq!(storage.read("42").await.expect("read"), "alice");
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStorage {
    records: RwLock<HashMap<String, String>>,
}

impl InMemoryUserStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UserStorage for InMemoryUserStorage {
    async fn store(&self, id: &str, name: &str) -> Result<(), UserStorageError> {
        self.records
            .write()
            .await
            .insert(id.to_owned(), name.to_owned());
        Ok(())
    }

    async fn read(&self, id: &str) -> Result<String, UserStorageError> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(UserStorageError::not_found)
    }

    async fn delete(&self, id: &str) -> Result<(), UserStorageError> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(UserStorageError::not_found)
    }
}
