use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::require_non_blank;
use crate::error::MockError;

/// Sender name recorded for messages posted through the API.
pub const SELF_SENDER: &str = "You";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A conversation. `messages` is ordered most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConversation {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub title: String,
    pub profile: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// `POST /api/chats/:id/messages` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendMessageRequest {
    pub message: String,
}

impl SendMessageRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        require_non_blank("message", &self.message)
    }
}
