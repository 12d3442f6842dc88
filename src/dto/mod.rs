use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Note, NoteDraft, WebhookLogEntry};

pub const TITLE_MAX_CHARS: usize = 100;
pub const MESSAGE_MAX_CHARS: usize = 200;
pub const QUERY_MAX_CHARS: usize = 50;
pub const TAG_FILTER_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: Option<String>,
    /// Note tags, in the order they were given
    pub tags: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            tags: note.tags,
            created_at: note.created_at,
        }
    }
}

/// Body of both note creation and note update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteRequest {
    /// Note title, 1 to 100 characters
    pub title: String,
    /// Note content
    #[serde(default)]
    pub content: Option<String>,
    /// Note tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("title", &self.title, 1, TITLE_MAX_CHARS)
    }
}

impl From<NoteRequest> for NoteDraft {
    fn from(request: NoteRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            tags: request.tags,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotesQuery {
    /// Case-insensitive substring of the title or content
    pub q: Option<String>,
    /// Exact tag the note must carry
    pub tag: Option<String>,
}

impl ListNotesQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(q) = &self.q {
            check_length("q", q, 0, QUERY_MAX_CHARS)?;
        }
        if let Some(tag) = &self.tag {
            check_length("tag", tag, 0, TAG_FILTER_MAX_CHARS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebhookNoteRequest {
    /// Name of the pushing system
    #[serde(default)]
    pub source: Option<String>,
    /// Event text, 1 to 200 characters
    pub message: String,
    /// Tags to attach to the created note
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WebhookNoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("message", &self.message, 1, MESSAGE_MAX_CHARS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookLogResponse {
    /// Local time the delivery was recorded
    pub timestamp: String,
    /// Delivery body as received
    pub payload: WebhookNoteRequest,
}

impl From<WebhookLogEntry> for WebhookLogResponse {
    fn from(entry: WebhookLogEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            payload: entry.payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError {
            field: field.to_string(),
            message: format!("must be at least {min} characters"),
        });
    }
    if len > max {
        return Err(ValidationError {
            field: field.to_string(),
            message: format!("must be at most {max} characters, got {len}"),
        });
    }
    Ok(())
}
