use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    http::StatusCode,
    response::Json,
};
use mockdesk_core::models::{CreateUserRequest, InviteUserRequest, UpdateUserRequest, User};
use mockdesk_core::query::{Page, UserQuery};

use super::params::parse_query;
use super::response::{parse_body, ApiResult};
use super::ApiState;

/// `GET /api/users?page&pageSize&status*&role*&username`
pub(super) async fn list(
    State(state): State<ApiState>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<Page<User>>> {
    let query = UserQuery::from_params(&parse_query(raw.as_deref()))?;
    Ok(Json(state.store.list_users(&query).await?))
}

pub(super) async fn get(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.store.get_user(&id).await?))
}

pub(super) async fn create(
    State(state): State<ApiState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let request = parse_body(body)?;
    let user = state.store.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /api/users/invite`
pub(super) async fn invite(
    State(state): State<ApiState>,
    body: Result<Json<InviteUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let request = parse_body(body)?;
    let user = state.store.invite_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub(super) async fn update(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let patch = parse_body(body)?;
    Ok(Json(state.store.update_user(&id, patch).await?))
}

pub(super) async fn delete(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
