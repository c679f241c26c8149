use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    http::StatusCode,
    response::Json,
};
use mockdesk_core::models::{ChatConversation, ChatMessage, SendMessageRequest};
use mockdesk_core::query::{ChatQuery, Listing};

use super::params::parse_query;
use super::response::{parse_body, ApiResult};
use super::ApiState;

/// `GET /api/chats?search`
pub(super) async fn list(
    State(state): State<ApiState>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<Listing<ChatConversation>>> {
    let query = ChatQuery::from_params(&parse_query(raw.as_deref()))?;
    Ok(Json(state.store.list_chats(&query).await?))
}

pub(super) async fn get(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChatConversation>> {
    Ok(Json(state.store.get_chat(&id).await?))
}

/// `POST /api/chats/{id}/messages` — returns the new message.
pub(super) async fn post_message(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ChatMessage>)> {
    let request = parse_body(body)?;
    let message = state.store.post_message(&id, request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
