//! Board service for corkboard.
//!
//! High-level operations over boards and their attachments: validation,
//! upload persistence on create, and the delete cascade that spans rows
//! and on-disk files.

use std::path::Path;

use tracing::warn;

use super::attachments::AttachmentRepository;
use super::repository::BoardRepository;
use super::types::{Attachment, Board, BoardUpdate, NewAttachment, NewBoard, PageRequest};
use crate::db::Database;
use crate::file::{FileStorage, FileUpload};
use crate::{CorkboardError, Result};

/// Maximum length for board titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for board content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 20_000;

/// Validate a board title.
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(CorkboardError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CorkboardError::Validation(format!(
            "title too long (max {MAX_TITLE_LENGTH} characters)"
        )));
    }
    Ok(())
}

/// Validate board content.
fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(CorkboardError::Validation(
            "content is required".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CorkboardError::Validation(format!(
            "content too long (max {MAX_CONTENT_LENGTH} characters)"
        )));
    }
    Ok(())
}

/// A board together with its attachment list.
///
/// The attachment list is always populated; a board without attachments
/// carries an empty vec, never an absent one.
#[derive(Debug, Clone)]
pub struct BoardDetail {
    /// The board row.
    pub board: Board,
    /// Attachments ordered by ID.
    pub attachments: Vec<Attachment>,
}

/// A page of boards with the total count across all pages.
#[derive(Debug, Clone)]
pub struct BoardPage {
    /// The boards in this page.
    pub items: Vec<Board>,
    /// Total number of boards.
    pub total: i64,
    /// 1-based page number.
    pub page: i64,
    /// Page size.
    pub size: i64,
}

/// Service for board operations.
pub struct BoardService<'a> {
    db: &'a Database,
    storage: &'a FileStorage,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService.
    pub fn new(db: &'a Database, storage: &'a FileStorage) -> Self {
        Self { db, storage }
    }

    /// List all boards, newest first. Attachments are not populated for
    /// the list view.
    pub async fn get_list(&self) -> Result<Vec<Board>> {
        BoardRepository::new(self.db.pool()).list().await
    }

    /// Get a page of boards with the total count.
    pub async fn get_page(&self, request: &PageRequest) -> Result<BoardPage> {
        let repo = BoardRepository::new(self.db.pool());
        let total = repo.count().await?;
        let items = repo.get_page(request).await?;

        Ok(BoardPage {
            items,
            total,
            page: request.page,
            size: request.size,
        })
    }

    /// Get a board with its full attachment list.
    ///
    /// Fails with NotFound when the ID does not exist.
    pub async fn get(&self, id: i64) -> Result<BoardDetail> {
        let board = BoardRepository::new(self.db.pool())
            .get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;

        let attachments = AttachmentRepository::new(self.db.pool())
            .list_by_board(id)
            .await?;

        Ok(BoardDetail { board, attachments })
    }

    /// Create a board, persisting any uploads as attachments.
    ///
    /// Each upload is written through the file storage and recorded as an
    /// attachment row referencing the new board. A failure partway leaves
    /// the board and the attachments created so far in place; there is no
    /// compensating rollback across the file/database boundary.
    pub async fn create(&self, input: NewBoard, uploads: Vec<FileUpload>) -> Result<BoardDetail> {
        validate_title(&input.title)?;
        validate_content(&input.content)?;
        if input.writer.trim().is_empty() {
            return Err(CorkboardError::Validation("writer is required".to_string()));
        }

        let board = BoardRepository::new(self.db.pool()).create(&input).await?;

        let attachment_repo = AttachmentRepository::new(self.db.pool());
        let mut attachments = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let stored_name = self.storage.save(&upload.data, &upload.filename)?;
            let path = self.storage.resolve(&stored_name);
            let attachment = attachment_repo
                .create(&NewAttachment::new(
                    board.id,
                    path.display().to_string(),
                    upload.filename,
                ))
                .await?;
            attachments.push(attachment);
        }

        Ok(BoardDetail { board, attachments })
    }

    /// Update a board's mutable fields.
    ///
    /// Fails with NotFound when the ID does not exist (the store reports
    /// 0 affected rows). The attachment set is never altered here.
    pub async fn update(&self, id: i64, update: BoardUpdate) -> Result<BoardDetail> {
        if let Some(ref title) = update.title {
            validate_title(title)?;
        }
        if let Some(ref content) = update.content {
            validate_content(content)?;
        }

        let rows = BoardRepository::new(self.db.pool())
            .update(id, &update)
            .await?;
        if rows == 0 {
            return Err(CorkboardError::NotFound("board".to_string()));
        }

        self.get(id).await
    }

    /// Delete a board, cascading to its attachments.
    ///
    /// On-disk files are removed best-effort first (failures are logged,
    /// not fatal), then attachment rows and the board row go in one store
    /// transaction. Returns the deleted board for confirmation.
    pub async fn delete(&self, id: i64) -> Result<BoardDetail> {
        let detail = self.get(id).await?;

        for attachment in &detail.attachments {
            if let Err(e) = remove_stored_file(&attachment.path) {
                warn!(
                    "failed to delete attachment file {}: {}",
                    attachment.path, e
                );
            }
        }

        let rows = BoardRepository::new(self.db.pool())
            .delete_cascade(id)
            .await?;
        if rows == 0 {
            return Err(CorkboardError::NotFound("board".to_string()));
        }

        Ok(detail)
    }

    /// Get an attachment by ID.
    ///
    /// Fails with NotFound when absent.
    pub async fn get_attachment(&self, id: i64) -> Result<Attachment> {
        AttachmentRepository::new(self.db.pool())
            .get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("attachment".to_string()))
    }

    /// Delete a single attachment.
    ///
    /// The on-disk file is removed best-effort before the row. Fails with
    /// NotFound when absent.
    pub async fn delete_attachment(&self, id: i64) -> Result<()> {
        let attachment = self.get_attachment(id).await?;

        if let Err(e) = remove_stored_file(&attachment.path) {
            warn!(
                "failed to delete attachment file {}: {}",
                attachment.path, e
            );
        }

        let rows = AttachmentRepository::new(self.db.pool())
            .delete(id)
            .await?;
        if rows == 0 {
            return Err(CorkboardError::NotFound("attachment".to_string()));
        }

        Ok(())
    }
}

/// Remove a stored file, treating an already-missing file as success.
fn remove_stored_file(path: &str) -> std::io::Result<()> {
    match std::fs::remove_file(Path::new(path)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, Database, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("uploads")).unwrap();
        let db = Database::open_in_memory().await.unwrap();
        (temp_dir, db, storage)
    }

    fn upload(name: &str, data: &[u8]) -> FileUpload {
        FileUpload::new(name, None, data.to_vec())
    }

    #[tokio::test]
    async fn test_create_and_get_roundtrip() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let created = service
            .create(NewBoard::new("T", "C", "alice"), vec![])
            .await
            .unwrap();

        assert!(created.board.id > 0);
        assert!(created.attachments.is_empty());
        assert_eq!(created.board.created_at, created.board.updated_at);

        let fetched = service.get(created.board.id).await.unwrap();
        assert_eq!(fetched.board.title, "T");
        assert_eq!(fetched.board.content, "C");
        assert_eq!(fetched.board.writer, "alice");
        assert!(fetched.attachments.is_empty());
    }

    #[tokio::test]
    async fn test_create_validates_blank_fields() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let result = service.create(NewBoard::new(" ", "C", "w"), vec![]).await;
        assert!(matches!(result, Err(CorkboardError::Validation(_))));

        let result = service.create(NewBoard::new("T", "", "w"), vec![]).await;
        assert!(matches!(result, Err(CorkboardError::Validation(_))));

        let result = service.create(NewBoard::new("T", "C", "  "), vec![]).await;
        assert!(matches!(result, Err(CorkboardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_with_uploads() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let detail = service
            .create(
                NewBoard::new("With files", "body", "bob"),
                vec![upload("a.txt", b"alpha"), upload("b.txt", b"beta")],
            )
            .await
            .unwrap();

        assert_eq!(detail.attachments.len(), 2);
        assert_eq!(detail.attachments[0].filename, "a.txt");
        assert_eq!(detail.attachments[1].filename, "b.txt");
        for attachment in &detail.attachments {
            assert_eq!(attachment.board_id, detail.board.id);
            assert!(Path::new(&attachment.path).exists());
        }
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let result = service.get(42).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_reflects_changes() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let created = service
            .create(NewBoard::new("Before", "Old", "eve"), vec![])
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = service
            .update(created.board.id, BoardUpdate::new("After", "New"))
            .await
            .unwrap();

        assert_eq!(updated.board.title, "After");
        assert_eq!(updated.board.content, "New");
        assert_eq!(updated.board.created_at, created.board.created_at);
        assert!(updated.board.updated_at > created.board.updated_at);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let result = service.update(999, BoardUpdate::new("T", "C")).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_leaves_attachments_alone() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let created = service
            .create(
                NewBoard::new("T", "C", "w"),
                vec![upload("keep.txt", b"data")],
            )
            .await
            .unwrap();

        let updated = service
            .update(created.board.id, BoardUpdate::new("T2", "C2"))
            .await
            .unwrap();

        assert_eq!(updated.attachments.len(), 1);
        assert_eq!(updated.attachments[0].filename, "keep.txt");
    }

    #[tokio::test]
    async fn test_delete_returns_board_and_cascades() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let created = service
            .create(
                NewBoard::new("Doomed", "body", "w"),
                vec![upload("gone.txt", b"bye")],
            )
            .await
            .unwrap();
        let attachment_id = created.attachments[0].id;
        let file_path = created.attachments[0].path.clone();
        assert!(Path::new(&file_path).exists());

        let deleted = service.delete(created.board.id).await.unwrap();
        assert_eq!(deleted.board.id, created.board.id);
        assert_eq!(deleted.board.title, "Doomed");

        // Board, attachment row, and file are all gone
        let result = service.get(created.board.id).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
        let result = service.get_attachment(attachment_id).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
        assert!(!Path::new(&file_path).exists());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let result = service.delete(123).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_survives_missing_file() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let created = service
            .create(
                NewBoard::new("T", "C", "w"),
                vec![upload("fleeting.txt", b"x")],
            )
            .await
            .unwrap();

        // Someone removed the file behind our back
        std::fs::remove_file(&created.attachments[0].path).unwrap();

        let deleted = service.delete(created.board.id).await.unwrap();
        assert_eq!(deleted.board.id, created.board.id);
    }

    #[tokio::test]
    async fn test_delete_attachment() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let created = service
            .create(NewBoard::new("T", "C", "w"), vec![upload("x.txt", b"x")])
            .await
            .unwrap();
        let attachment = &created.attachments[0];

        service.delete_attachment(attachment.id).await.unwrap();
        assert!(!Path::new(&attachment.path).exists());

        let result = service.get_attachment(attachment.id).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));

        // The board itself is untouched
        let board = service.get(created.board.id).await.unwrap();
        assert!(board.attachments.is_empty());
    }

    #[tokio::test]
    async fn test_delete_attachment_not_found() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        let result = service.delete_attachment(55).await;
        assert!(matches!(result, Err(CorkboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_page_with_total() {
        let (_tmp, db, storage) = setup().await;
        let service = BoardService::new(&db, &storage);

        for i in 0..3 {
            service
                .create(NewBoard::new(format!("post {i}"), "body", "w"), vec![])
                .await
                .unwrap();
        }

        let page = service.get_page(&PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 2);

        let page = service.get_page(&PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(page.items.len(), 1);

        let page = service.get_page(&PageRequest::new(3, 2)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}
