use async_trait::async_trait;
use mockdesk_core::{error::MockError, traits::KvStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory key/value backend.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set_raw`/`remove` fail, for error-path tests.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), MockError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MockError::Storage("simulated write error".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>, MockError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), MockError> {
        self.check_writable()?;
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MockError> {
        self.check_writable()?;
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let kv = MemoryBackend::new();
        assert_eq!(kv.get_raw("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let kv = MemoryBackend::new();
        kv.set_raw("k", "[1]".to_string()).await.unwrap();
        kv.set_raw("k", "[2]".to_string()).await.unwrap();
        assert_eq!(kv.get_raw("k").await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let kv = MemoryBackend::new();
        kv.remove("never-written").await.unwrap();
        kv.set_raw("k", "{}".to_string()).await.unwrap();
        kv.remove("k").await.unwrap();
        assert_eq!(kv.get_raw("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_simulated_write_error() {
        let kv = MemoryBackend::new();
        kv.set_fail_writes(true);
        let err = kv.set_raw("k", "[]".to_string()).await.unwrap_err();
        assert!(matches!(err, MockError::Storage(_)));
        kv.set_fail_writes(false);
        kv.set_raw("k", "[]".to_string()).await.unwrap();
    }
}
