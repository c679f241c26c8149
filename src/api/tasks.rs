use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    http::StatusCode,
    response::Json,
};
use mockdesk_core::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use mockdesk_core::query::{Page, TaskQuery};

use super::params::parse_query;
use super::response::{parse_body, ApiResult};
use super::ApiState;

/// `GET /api/tasks?page&pageSize&status*&priority*&filter`
pub(super) async fn list(
    State(state): State<ApiState>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<Page<Task>>> {
    let query = TaskQuery::from_params(&parse_query(raw.as_deref()))?;
    Ok(Json(state.store.list_tasks(&query).await?))
}

/// `GET /api/tasks/{id}`
pub(super) async fn get(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.store.get_task(&id).await?))
}

/// `POST /api/tasks`
pub(super) async fn create(
    State(state): State<ApiState>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let request = parse_body(body)?;
    let task = state.store.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}`
pub(super) async fn update(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let patch = parse_body(body)?;
    Ok(Json(state.store.update_task(&id, patch).await?))
}

/// `DELETE /api/tasks/{id}` — 204 whether or not the task existed.
pub(super) async fn delete(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_task(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
