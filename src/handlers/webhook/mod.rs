use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{NoteResponse, ValidationError, WebhookLogResponse, WebhookNoteRequest},
    handlers::error_response,
    service::WebhookService,
};

/// Header carrying the shared webhook secret.
pub const TOKEN_HEADER: &str = "x-webhook-token";

#[utoipa::path(
    post,
    path = "/webhooks/note",
    request_body = WebhookNoteRequest,
    params(
        ("X-Webhook-Token" = Option<String>, Header, description = "Shared webhook secret")
    ),
    responses(
        (status = 200, description = "Delivery stored as a note", body = Vec<NoteResponse>),
        (status = 401, description = "Missing or invalid webhook token"),
        (status = 422, description = "Invalid delivery", body = ValidationError),
        (status = 500, description = "Internal server error")
    ),
    tag = "webhooks"
)]
#[debug_handler]
pub async fn ingest_note(
    State(service): State<Arc<WebhookService>>,
    headers: HeaderMap,
    Json(payload): Json<WebhookNoteRequest>,
) -> Response {
    let credential = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    match service.ingest(payload, credential).await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => error_response(e, "ingest webhook"),
    }
}

#[utoipa::path(
    get,
    path = "/webhooks/logs",
    responses(
        (status = 200, description = "Recent deliveries, oldest first", body = Vec<WebhookLogResponse>)
    ),
    tag = "webhooks"
)]
#[debug_handler]
pub async fn get_logs(State(service): State<Arc<WebhookService>>) -> Response {
    (StatusCode::OK, Json(service.get_logs().await)).into_response()
}
