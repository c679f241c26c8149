//! Error envelope and body extraction shared by every handler.

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use mockdesk_core::error::MockError;
use serde_json::json;
use tracing::{debug, error};

/// A [`MockError`] on its way out as `{code, message, details?}`.
#[derive(Debug)]
pub struct ApiError(pub MockError);

impl From<MockError> for ApiError {
    fn from(err: MockError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("request failed: {}", self.0);
        } else {
            debug!("request rejected: {}", self.0);
        }

        let mut body = json!({
            "code": self.0.code(),
            "message": self.0.to_string(),
        });
        if let MockError::Validation { field, .. } = &self.0 {
            body["details"] = json!({ "field": field });
        }

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Unwrap a JSON body, turning syntax/shape failures into `VALIDATION_ERROR`.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value).map_err(|e| {
        ApiError(MockError::validation(
            "body",
            format!("invalid request: {}", e.body_text()),
        ))
    })
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "code": "NOT_FOUND",
            "message": format!("no route for {}", uri.path()),
        })),
    )
        .into_response()
}
