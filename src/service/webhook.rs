use chrono::Local;

use std::sync::Arc;

use crate::{
    dto::{NoteRequest, NoteResponse, WebhookLogResponse, WebhookNoteRequest},
    models::WebhookLogEntry,
    service::{NoteService, ServiceError},
    webhook_log::WebhookLog,
};

const TITLE_PREFIX_CHARS: usize = 40;
const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns pushed events into notes and keeps a short trail of deliveries.
pub struct WebhookService {
    notes: Arc<NoteService>,
    log: WebhookLog,
    token: Option<String>,
}

impl WebhookService {
    /// `token` of `None` accepts every delivery.
    pub const fn new(notes: Arc<NoteService>, log: WebhookLog, token: Option<String>) -> Self {
        Self { notes, log, token }
    }

    pub async fn ingest(
        &self,
        payload: WebhookNoteRequest,
        credential: Option<&str>,
    ) -> Result<Vec<NoteResponse>, ServiceError> {
        self.authorize(credential)?;
        payload.validate()?;

        // The note is written before the log entry; a failed write leaves the log untouched.
        let note = self.notes.create_note(derive_note(&payload)).await?;

        tracing::info!(
            "Webhook delivery stored as note {} (source: {})",
            note.id,
            payload.source.as_deref().unwrap_or("-")
        );

        self.log
            .append(WebhookLogEntry {
                timestamp: Local::now().format(LOG_TIMESTAMP_FORMAT).to_string(),
                payload,
            })
            .await;

        Ok(vec![note])
    }

    pub async fn get_logs(&self) -> Vec<WebhookLogResponse> {
        self.log
            .snapshot()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub const fn log(&self) -> &WebhookLog {
        &self.log
    }

    fn authorize(&self, credential: Option<&str>) -> Result<(), ServiceError> {
        let Some(expected) = self.token.as_deref() else {
            return Ok(());
        };

        match credential {
            Some(given) if timing_safe_eq(given, expected) => Ok(()),
            _ => {
                tracing::warn!("Rejected webhook delivery with missing or invalid token");
                Err(ServiceError::Unauthorized)
            }
        }
    }
}

fn derive_note(payload: &WebhookNoteRequest) -> NoteRequest {
    let mut tags = payload.tags.clone();
    if let Some(source) = payload.source.as_deref().filter(|s| !s.is_empty()) {
        tags.push(format!("source:{source}"));
    }

    NoteRequest {
        title: payload.message.chars().take(TITLE_PREFIX_CHARS).collect(),
        content: Some(payload.message.clone()),
        tags,
    }
}

/// Compares without short-circuiting on the first differing byte.
fn timing_safe_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
