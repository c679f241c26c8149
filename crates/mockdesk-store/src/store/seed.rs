//! Test seeding: overwrite collections wholesale, bypassing the services.

use super::{StorageKey, Store};
use mockdesk_core::error::MockError;
use mockdesk_core::models::{App, AuthRecord, ChatConversation, Task, User};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Seed document. Present collections replace the stored ones; absent
/// collections are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<App>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chats: Option<Vec<ChatConversation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthRecord>,
}

impl SeedData {
    /// Parse a seed document from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, MockError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read a seed document from disk.
    pub fn from_file(path: &str) -> Result<Self, MockError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Collection keys in lock-acquisition order.
const COLLECTION_KEYS: [StorageKey; 4] = [
    StorageKey::Tasks,
    StorageKey::Users,
    StorageKey::Apps,
    StorageKey::Chats,
];

impl Store {
    /// Write every collection present in `data`.
    pub async fn seed(&self, data: SeedData) -> Result<(), MockError> {
        let mut guards = Vec::with_capacity(COLLECTION_KEYS.len());
        for key in COLLECTION_KEYS {
            guards.push(self.lock(key).await);
        }

        if let Some(tasks) = &data.tasks {
            self.set(StorageKey::Tasks, tasks).await?;
        }
        if let Some(users) = &data.users {
            self.set(StorageKey::Users, users).await?;
        }
        if let Some(apps) = &data.apps {
            self.set(StorageKey::Apps, apps).await?;
        }
        if let Some(chats) = &data.chats {
            self.set(StorageKey::Chats, chats).await?;
        }
        if let Some(auth) = &data.auth {
            self.set(StorageKey::Auth, auth).await?;
        }

        info!(
            "seeded store: tasks={} users={} apps={} chats={} auth={}",
            count(&data.tasks),
            count(&data.users),
            count(&data.apps),
            count(&data.chats),
            data.auth.is_some()
        );
        Ok(())
    }

    /// Remove every key, collections and auth record included.
    pub async fn reset(&self) -> Result<(), MockError> {
        let mut guards = Vec::with_capacity(COLLECTION_KEYS.len());
        for key in COLLECTION_KEYS {
            guards.push(self.lock(key).await);
        }
        for key in StorageKey::ALL {
            self.remove(key).await?;
        }
        info!("store reset");
        Ok(())
    }
}

fn count<T>(collection: &Option<Vec<T>>) -> String {
    collection
        .as_ref()
        .map(|c| c.len().to_string())
        .unwrap_or_else(|| "-".to_string())
}
