pub mod rest;
pub mod webhook;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::ServiceError;

/// Maps a service failure to a response; `action` names what was attempted.
fn error_response(err: ServiceError, action: &str) -> Response {
    match err {
        ServiceError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, Json(e)).into_response(),
        ServiceError::Unauthorized => {
            (StatusCode::UNAUTHORIZED, "Invalid webhook token").into_response()
        }
        ServiceError::Database(e) => {
            tracing::error!("failed to {action}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {action}")).into_response()
        }
    }
}
