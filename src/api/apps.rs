use axum::{
    extract::{Path, RawQuery, State},
    response::Json,
};
use mockdesk_core::models::App;
use mockdesk_core::query::{AppQuery, Listing};

use super::params::parse_query;
use super::response::ApiResult;
use super::ApiState;

/// `GET /api/apps?type&filter&sort`
pub(super) async fn list(
    State(state): State<ApiState>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<Listing<App>>> {
    let query = AppQuery::from_params(&parse_query(raw.as_deref()))?;
    Ok(Json(state.store.list_apps(&query).await?))
}

pub(super) async fn get(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<App>> {
    Ok(Json(state.store.get_app(&id).await?))
}

/// `POST /api/apps/{id}/connect`
pub(super) async fn connect(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<App>> {
    Ok(Json(state.store.connect_app(&id).await?))
}

/// `POST /api/apps/{id}/disconnect`
pub(super) async fn disconnect(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<App>> {
    Ok(Json(state.store.disconnect_app(&id).await?))
}
