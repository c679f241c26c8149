//! Test hooks. Only routed when `api.allow_seeding` is set.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use mockdesk_store::SeedData;
use tracing::info;

use super::response::{parse_body, ApiResult};
use super::ApiState;

/// `POST /api/__seed` — replace the collections present in the body.
pub(super) async fn seed(
    State(state): State<ApiState>,
    body: Result<Json<SeedData>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let data = parse_body(body)?;
    state.store.seed(data).await?;
    info!("store seeded over http");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/__reset` — empty every collection and drop the session.
pub(super) async fn reset(State(state): State<ApiState>) -> ApiResult<StatusCode> {
    state.store.reset().await?;
    info!("store reset over http");
    Ok(StatusCode::NO_CONTENT)
}
