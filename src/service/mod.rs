mod webhook;

pub use webhook::WebhookService;

use crate::{
    dto::{ListNotesQuery, NoteRequest, NoteResponse, ValidationError},
    models::{NoteDraft, NoteFilter},
    repository::Repository,
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("missing or invalid webhook token")]
    Unauthorized,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<tokio::sync::Mutex<Repository>>,
}

impl NoteService {
    pub const fn new(repo: Arc<tokio::sync::Mutex<Repository>>) -> Self {
        Self { repo }
    }

    pub async fn create_note(&self, request: NoteRequest) -> Result<NoteResponse, ServiceError> {
        request.validate()?;
        let draft = NoteDraft::from(request);

        let note = self.repo.lock().await.create_note(&draft)?;
        Ok(note.into())
    }

    pub async fn update_note(
        &self,
        id: i64,
        request: NoteRequest,
    ) -> Result<Option<NoteResponse>, ServiceError> {
        request.validate()?;
        let draft = NoteDraft::from(request);

        let note = self.repo.lock().await.update_note(id, &draft)?;
        Ok(note.map(Into::into))
    }

    pub async fn delete_note(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.repo.lock().await.delete_note(id)?)
    }

    pub async fn get_one_note(&self, id: i64) -> Result<Option<NoteResponse>, ServiceError> {
        let note = self.repo.lock().await.get_one_note(id)?;
        Ok(note.map(Into::into))
    }

    pub async fn get_all_notes(
        &self,
        query: ListNotesQuery,
    ) -> Result<Vec<NoteResponse>, ServiceError> {
        query.validate()?;
        let filter = NoteFilter {
            text: query.q,
            tag: query.tag,
        };

        let notes = self.repo.lock().await.get_all_notes(&filter)?;
        Ok(notes.into_iter().map(Into::into).collect())
    }
}
