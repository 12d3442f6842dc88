#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use std::sync::Arc;

use notes_webhook_server::{
    repository::Repository,
    router,
    service::{NoteService, WebhookService},
    webhook_log::WebhookLog,
};

pub const TOKEN: &str = "test-token";

/// A router over a fresh SQLite file that lives as long as this value.
pub struct TestApp {
    pub router: Router,
    pub webhooks: Arc<WebhookService>,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_token(Some(TOKEN))
    }

    pub fn with_token(token: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut repo = Repository::open(dir.path().join("notes.db")).expect("open database");
        repo.migrate().expect("migrate database");

        let notes = Arc::new(NoteService::new(Arc::new(tokio::sync::Mutex::new(repo))));
        let webhooks = Arc::new(WebhookService::new(
            notes.clone(),
            WebhookLog::default(),
            token.map(str::to_string),
        ));

        Self {
            router: router(notes, webhooks.clone()),
            webhooks,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request execution");
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body extraction");
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&body).into_owned())
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request("GET", uri)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request("DELETE", uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body)).await
    }

    pub async fn post_webhook(&self, body: &Value, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/webhooks/note")
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header("X-Webhook-Token", token);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("request build");

        self.send(request).await
    }
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request build")
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build")
}
