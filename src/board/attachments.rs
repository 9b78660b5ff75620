//! Attachment repository for corkboard.

use sqlx::SqlitePool;

use super::types::{Attachment, NewAttachment};
use crate::datetime::now_utc_string;
use crate::{CorkboardError, Result};

/// Repository for attachment operations.
pub struct AttachmentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AttachmentRepository<'a> {
    /// Create a new AttachmentRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new attachment row.
    ///
    /// The owning board must exist; creating an attachment against a missing
    /// board is a validation error. Returns the created attachment with the
    /// assigned ID.
    pub async fn create(&self, new_attachment: &NewAttachment) -> Result<Attachment> {
        let board_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM boards WHERE id = ?)")
                .bind(new_attachment.board_id)
                .fetch_one(self.pool)
                .await?;

        if !board_exists {
            return Err(CorkboardError::Validation(format!(
                "board {} does not exist",
                new_attachment.board_id
            )));
        }

        let result = sqlx::query(
            "INSERT INTO attachments (board_id, path, filename, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(new_attachment.board_id)
        .bind(&new_attachment.path)
        .bind(&new_attachment.filename)
        .bind(now_utc_string())
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("attachment".to_string()))
    }

    /// Get an attachment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Attachment>> {
        let attachment = sqlx::query_as::<_, Attachment>(
            "SELECT id, board_id, path, filename, created_at
             FROM attachments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(attachment)
    }

    /// List attachments for a board, ordered by ID.
    pub async fn list_by_board(&self, board_id: i64) -> Result<Vec<Attachment>> {
        let attachments = sqlx::query_as::<_, Attachment>(
            "SELECT id, board_id, path, filename, created_at
             FROM attachments WHERE board_id = ? ORDER BY id ASC",
        )
        .bind(board_id)
        .fetch_all(self.pool)
        .await?;

        Ok(attachments)
    }

    /// Delete an attachment row by ID.
    ///
    /// Returns the number of affected rows, 0 when not found.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM attachments WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
