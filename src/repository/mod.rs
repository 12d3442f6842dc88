mod embedded;

use embedded::migrations;

use rusqlite::{Connection, OptionalExtension, Row, params, types::Type};

use std::path::Path;

use crate::models::{Note, NoteDraft, NoteFilter};

const NOTE_COLUMNS: &str = "id, title, content, tags, created_at";

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub fn open(database_path: impl AsRef<Path>) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(database_path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run(&mut self.conn)?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    pub fn create_note(&self, draft: &NoteDraft) -> Result<Note, rusqlite::Error> {
        self.conn.query_row(
            &format!(
                "INSERT INTO notes (title, content, tags, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING {NOTE_COLUMNS}"
            ),
            params![
                draft.title,
                draft.content,
                encode_tags(&draft.tags)?,
                chrono::Utc::now()
            ],
            note_from_row,
        )
    }

    pub fn update_note(&self, id: i64, draft: &NoteDraft) -> Result<Option<Note>, rusqlite::Error> {
        self.conn
            .query_row(
                &format!(
                    "UPDATE notes SET title = ?1, content = ?2, tags = ?3 WHERE id = ?4 RETURNING {NOTE_COLUMNS}"
                ),
                params![draft.title, draft.content, encode_tags(&draft.tags)?, id],
                note_from_row,
            )
            .optional()
    }

    pub fn delete_note(&self, id: i64) -> Result<bool, rusqlite::Error> {
        let rows = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])?;

        Ok(rows == 1)
    }

    pub fn get_one_note(&self, id: i64) -> Result<Option<Note>, rusqlite::Error> {
        self.conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                params![id],
                note_from_row,
            )
            .optional()
    }

    /// Notes matching `filter`, in storage order.
    ///
    /// The tag predicate runs in SQLite against the JSON tag array; the text
    /// predicate is applied afterwards so that case folding is Unicode-aware.
    pub fn get_all_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes \
             WHERE ?1 IS NULL OR EXISTS (SELECT 1 FROM json_each(notes.tags) WHERE json_each.value = ?1) \
             ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![filter.tag], note_from_row)?;

        let mut vec: Vec<Note> = Vec::new();

        for row in rows {
            let note = row?;
            if filter
                .text
                .as_deref()
                .is_none_or(|text| note.matches_text(text))
            {
                vec.push(note);
            }
        }

        Ok(vec)
    }
}

fn note_from_row(row: &Row<'_>) -> Result<Note, rusqlite::Error> {
    let tags: String = row.get("tags")?;
    let tags = serde_json::from_str(&tags)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        tags,
        created_at: row.get("created_at")?,
    })
}

fn encode_tags(tags: &[String]) -> Result<String, rusqlite::Error> {
    serde_json::to_string(tags).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}
