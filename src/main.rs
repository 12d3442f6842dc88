use std::sync::Arc;

use notes_webhook_server::{
    config,
    repository::Repository,
    router,
    service::{NoteService, WebhookService},
    webhook_log::WebhookLog,
};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config");
    tracing::info!("Successfully loaded notes server config");

    if cfg.uses_default_token() {
        tracing::warn!(
            "Webhook token is the built-in default '{}'; set WEBHOOK_TOKEN before deploying",
            config::DEFAULT_WEBHOOK_TOKEN
        );
    } else if cfg.webhook_token().is_none() {
        tracing::warn!("Webhook token is empty, webhook deliveries are not authenticated");
    }

    // Repository creation and migration
    let mut repo = Repository::open(&cfg.database_path).unwrap_or_else(|e| {
        tracing::error!("Failed to open database '{}': {e}", cfg.database_path);
        panic!("failed to open database: {e}");
    });

    repo.migrate().unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });
    let repo_ptr = Arc::new(tokio::sync::Mutex::new(repo));

    // Service creation
    let notes = Arc::new(NoteService::new(repo_ptr));
    let webhooks = Arc::new(WebhookService::new(
        notes.clone(),
        WebhookLog::default(),
        cfg.webhook_token(),
    ));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .expect("failed to bind HTTP listener");
    let addr = listener.local_addr().expect("listener has no local address");

    tracing::info!("Notes server starting, listening on {}", addr);

    axum::serve(listener, router(notes, webhooks))
        .await
        .expect("failed to start server");
}
