use chrono::{DateTime, Utc};

use crate::dto::WebhookNoteRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields of a note a client is allowed to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
}

/// A single webhook delivery as kept in the in-memory log.
#[derive(Debug, Clone)]
pub struct WebhookLogEntry {
    pub timestamp: String,
    pub payload: WebhookNoteRequest,
}

/// Predicates for listing notes; both are optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub text: Option<String>,
    pub tag: Option<String>,
}

impl Note {
    /// Case-insensitive substring match against the title or the content.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .content
                .as_ref()
                .is_some_and(|content| content.to_lowercase().contains(&needle))
    }
}
