//! Typed access to the local store plus the per-entity services.
//!
//! Split into focused submodules:
//! - `keys` — the fixed storage key names
//! - `tasks`, `users`, `apps`, `chats` — collection CRUD
//! - `auth` — login/logout/me over the auth record
//! - `seed` — wholesale seeding and reset for test suites
//!
//! Every collection mutation holds that collection's lock for the whole
//! load → mutate → persist sequence, so overlapping requests cannot lose
//! each other's writes. Nothing is cached between calls.

mod apps;
mod auth;
mod chats;
mod keys;
mod seed;
mod tasks;
mod users;


pub use keys::StorageKey;
pub use seed::SeedData;

use mockdesk_core::config::{BackendKind, StorageConfig};
use mockdesk_core::error::MockError;
use mockdesk_core::traits::KvStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::backend::{MemoryBackend, SqliteBackend};

/// The local store shared by every handler.
#[derive(Clone)]
pub struct Store {
    kv: Arc<dyn KvStore>,
    locks: Arc<[Mutex<()>; StorageKey::COUNT]>,
}

impl Store {
    /// Wrap an existing backend.
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            kv,
            locks: Arc::new(std::array::from_fn(|_| Mutex::new(()))),
        }
    }

    /// Fresh store over a [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Build the backend named in the config.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, MockError> {
        let kv: Arc<dyn KvStore> = match config.backend_kind()? {
            BackendKind::Memory => Arc::new(MemoryBackend::new()),
            BackendKind::Sqlite => Arc::new(SqliteBackend::open(&config.db_path).await?),
        };
        Ok(Self::new(kv))
    }

    /// Name of the underlying backend.
    pub fn backend_name(&self) -> &str {
        self.kv.name()
    }

    /// Read and deserialize `key`. Missing keys are `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, MockError> {
        let raw = self.kv.get_raw(key.as_str()).await?;
        debug!("storage read {key} ({})", if raw.is_some() { "hit" } else { "miss" });
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and overwrite `key`.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), MockError> {
        let raw = serde_json::to_string(value)?;
        debug!("storage write {key} ({} bytes)", raw.len());
        self.kv.set_raw(key.as_str(), raw).await
    }

    /// Delete `key`.
    pub async fn remove(&self, key: StorageKey) -> Result<(), MockError> {
        debug!("storage delete {key}");
        self.kv.remove(key.as_str()).await
    }

    /// Raw JSON under `key`, for inspection.
    pub async fn dump(&self, key: StorageKey) -> Result<Option<serde_json::Value>, MockError> {
        self.get(key).await
    }

    /// Load a collection; an absent key is an empty collection.
    async fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Vec<T>, MockError> {
        Ok(self.get::<Vec<T>>(key).await?.unwrap_or_default())
    }

    async fn lock(&self, key: StorageKey) -> MutexGuard<'_, ()> {
        self.locks[key.index()].lock().await
    }

    /// Read-modify-write one collection under its lock.
    ///
    /// The collection is persisted only when `f` succeeds.
    async fn mutate<T, R, F>(&self, key: StorageKey, f: F) -> Result<R, MockError>
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce(&mut Vec<T>) -> Result<R, MockError> + Send,
        R: Send,
    {
        let _guard = self.lock(key).await;
        let mut records = self.load::<T>(key).await?;
        let result = f(&mut records)?;
        self.set(key, &records).await?;
        Ok(result)
    }
}
