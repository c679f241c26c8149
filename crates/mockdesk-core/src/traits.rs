use crate::error::MockError;
use async_trait::async_trait;

/// Key/value backend trait — the local store.
///
/// Holds one serialized JSON document per key, the way browser local
/// storage does. Implementations only move strings; (de)serialization and
/// collection semantics live in the store layer above.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Raw value for `key`, or `None` if the key was never written.
    async fn get_raw(&self, key: &str) -> Result<Option<String>, MockError>;

    /// Overwrite `key` unconditionally.
    async fn set_raw(&self, key: &str, value: String) -> Result<(), MockError>;

    /// Delete `key`. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), MockError>;
}
