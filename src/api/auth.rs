use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use mockdesk_core::models::{AuthUser, LoginRequest, LoginResponse};

use super::response::{parse_body, ApiResult};
use super::ApiState;

/// `POST /api/auth/login` — any password is accepted.
pub(super) async fn login(
    State(state): State<ApiState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let request = parse_body(body)?;
    Ok(Json(state.store.login(request).await?))
}

/// `POST /api/auth/logout` — 200 with an empty body.
pub(super) async fn logout(State(state): State<ApiState>) -> ApiResult<StatusCode> {
    state.store.logout().await?;
    Ok(StatusCode::OK)
}

/// `GET /api/auth/me`
pub(super) async fn me(State(state): State<ApiState>) -> ApiResult<Json<AuthUser>> {
    Ok(Json(state.store.me().await?))
}
