//! Board repository for corkboard.
//!
//! CRUD and pagination operations for boards in the database.

use sqlx::{QueryBuilder, SqlitePool};

use super::types::{Board, BoardUpdate, NewBoard, PageRequest};
use crate::datetime::now_utc_string;
use crate::{CorkboardError, Result};

/// Repository for board CRUD operations.
pub struct BoardRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new board in the database.
    ///
    /// Both timestamps are assigned here; update equals creation at insert.
    /// Returns the created board with the assigned ID.
    pub async fn create(&self, new_board: &NewBoard) -> Result<Board> {
        if new_board.title.trim().is_empty() {
            return Err(CorkboardError::Validation("title is required".to_string()));
        }
        if new_board.content.trim().is_empty() {
            return Err(CorkboardError::Validation(
                "content is required".to_string(),
            ));
        }
        if new_board.writer.trim().is_empty() {
            return Err(CorkboardError::Validation("writer is required".to_string()));
        }

        let now = now_utc_string();
        let result = sqlx::query(
            "INSERT INTO boards (title, content, writer, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_board.title)
        .bind(&new_board.content)
        .bind(&new_board.writer)
        .bind(&now)
        .bind(&now)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))
    }

    /// Get a board by ID. Attachments are not populated here.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Board>> {
        let board = sqlx::query_as::<_, Board>(
            "SELECT id, title, content, writer, created_at, updated_at
             FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(board)
    }

    /// List all boards, newest first.
    pub async fn list(&self) -> Result<Vec<Board>> {
        let boards = sqlx::query_as::<_, Board>(
            "SELECT id, title, content, writer, created_at, updated_at
             FROM boards ORDER BY id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(boards)
    }

    /// Update a board by ID.
    ///
    /// Only the mutable fields (title, content) are written; the update
    /// timestamp is refreshed regardless of which fields changed. Returns
    /// the number of affected rows, 0 when the ID does not exist.
    pub async fn update(&self, id: i64, update: &BoardUpdate) -> Result<u64> {
        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE boards SET ");
        let mut separated = query.separated(", ");

        separated.push("updated_at = ");
        separated.push_bind_unseparated(now_utc_string());

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title.clone());
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete a board row by ID.
    ///
    /// Returns the number of affected rows, 0 when not found. Attachment
    /// rows are untouched; use [`delete_cascade`](Self::delete_cascade) for
    /// the full lifecycle.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a board and its attachment rows in one transaction.
    ///
    /// Returns the number of deleted board rows, 0 when not found. On-disk
    /// files are the caller's concern; the service deletes them before
    /// calling this.
    pub async fn delete_cascade(&self, id: i64) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM attachments WHERE board_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Count all boards.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Get a page of boards.
    ///
    /// Pages are 1-based; a page beyond the last valid one returns an empty
    /// vec, never an error.
    pub async fn get_page(&self, request: &PageRequest) -> Result<Vec<Board>> {
        let sql = format!(
            "SELECT id, title, content, writer, created_at, updated_at
             FROM boards {} LIMIT ? OFFSET ?",
            request.sort.order_clause()
        );

        let boards = sqlx::query_as::<_, Board>(&sql)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(self.pool)
            .await?;

        Ok(boards)
    }
}
