//! Conversations and message posting.

use super::{StorageKey, Store};
use chrono::Utc;
use mockdesk_core::error::MockError;
use mockdesk_core::models::{ChatConversation, ChatMessage, SendMessageRequest, SELF_SENDER};
use mockdesk_core::query::{ChatQuery, Listing};
use tracing::info;

impl Store {
    pub async fn list_chats(&self, query: &ChatQuery) -> Result<Listing<ChatConversation>, MockError> {
        let chats = self.load::<ChatConversation>(StorageKey::Chats).await?;
        Ok(query.run(chats))
    }

    pub async fn get_chat(&self, id: &str) -> Result<ChatConversation, MockError> {
        self.load::<ChatConversation>(StorageKey::Chats)
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(MockError::NotFound("Chat"))
    }

    /// Prepend a message from [`SELF_SENDER`] to conversation `id`.
    pub async fn post_message(
        &self,
        id: &str,
        request: SendMessageRequest,
    ) -> Result<ChatMessage, MockError> {
        request.validate()?;
        let message = self
            .mutate(StorageKey::Chats, |chats: &mut Vec<ChatConversation>| {
                let chat = chats
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or(MockError::NotFound("Chat"))?;
                let message = ChatMessage {
                    sender: SELF_SENDER.to_string(),
                    message: request.message,
                    timestamp: Utc::now(),
                };
                chat.messages.insert(0, message.clone());
                Ok(message)
            })
            .await?;
        info!("message posted to chat {id}");
        Ok(message)
    }
}
