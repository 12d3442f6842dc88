//! Notes REST server with webhook ingestion.
//!
//! Notes live in a single SQLite table. Webhook deliveries are turned into
//! notes and the last few deliveries are kept in memory for inspection.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod webhook_log;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use handlers::{rest, webhook};
use service::{NoteService, WebhookService};

/// Builds the full HTTP surface over the given services.
pub fn router(notes: Arc<NoteService>, webhooks: Arc<WebhookService>) -> Router {
    let notes_router = Router::new()
        .route("/notes", get(rest::get_all_notes).post(rest::create_note))
        .route(
            "/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        )
        .with_state(notes);

    let webhook_router = Router::new()
        .route("/webhooks/note", post(webhook::ingest_note))
        .route("/webhooks/logs", get(webhook::get_logs))
        .with_state(webhooks);

    Router::new()
        .route("/", get(root))
        .merge(notes_router)
        .merge(webhook_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Hello world!").into_response()
}
