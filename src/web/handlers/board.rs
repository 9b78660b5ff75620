//! Board handlers for the Web API.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    response::Response,
    Json,
};
use tracing::info;

use crate::board::{BoardService, BoardUpdate, NewBoard, PageRequest};
use crate::file::{self, FileUpload};
use crate::web::dto::{
    ApiResponse, BoardDetailResponse, BoardResponse, PaginatedResponse, PaginationQuery,
    UpdateBoardRequest,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/boards - List all boards, newest first.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BoardResponse>>>, ApiError> {
    let boards = BoardService::new(&state.db, &state.storage)
        .get_list()
        .await?;

    let responses = boards.into_iter().map(BoardResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// GET /api/boards/page - Paginated board listing.
pub async fn page_boards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<BoardResponse>>, ApiError> {
    let request: PageRequest = query.to_page_request();
    let page = BoardService::new(&state.db, &state.storage)
        .get_page(&request)
        .await?;

    Ok(Json(page.into()))
}

/// GET /api/boards/:id - Get board details with attachments.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<BoardDetailResponse>>, ApiError> {
    let detail = BoardService::new(&state.db, &state.storage)
        .get(board_id)
        .await?;

    Ok(Json(ApiResponse::new(detail.into())))
}

/// POST /api/boards - Create a board.
///
/// Request body: multipart/form-data with "title", "content", "writer" and
/// zero or more "files" parts.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<BoardDetailResponse>>, ApiError> {
    let mut title = String::new();
    let mut content = String::new();
    let mut writer = String::new();
    let mut uploads: Vec<FileUpload> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "title" => title = read_text(field).await?,
            "content" => content = read_text(field).await?,
            "writer" => writer = read_text(field).await?,
            "files" => {
                if let Some(upload) = read_upload(field, state.max_upload_size).await? {
                    uploads.push(upload);
                }
            }
            _ => {}
        }
    }

    info!("Creating board '{}' by {}", title, writer);

    let detail = BoardService::new(&state.db, &state.storage)
        .create(NewBoard::new(title, content, writer), uploads)
        .await?;

    Ok(Json(ApiResponse::new(detail.into())))
}

/// PUT /api/boards/:id - Update a board's title and content.
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
    Json(req): Json<UpdateBoardRequest>,
) -> Result<Json<ApiResponse<BoardDetailResponse>>, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }
    if req.content.trim().is_empty() {
        return Err(ApiError::bad_request("Content is required"));
    }

    let detail = BoardService::new(&state.db, &state.storage)
        .update(board_id, BoardUpdate::new(req.title, req.content))
        .await?;

    Ok(Json(ApiResponse::new(detail.into())))
}

/// DELETE /api/boards/:id - Delete a board and its attachments.
///
/// Returns the deleted board for confirmation.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<BoardDetailResponse>>, ApiError> {
    info!("Deleting board {}", board_id);

    let detail = BoardService::new(&state.db, &state.storage)
        .delete(board_id)
        .await?;

    Ok(Json(ApiResponse::new(detail.into())))
}

/// GET /api/boards/attachments/:id/download - Download an attachment.
pub async fn download_attachment(
    State(state): State<Arc<AppState>>,
    Path(attachment_id): Path<i64>,
) -> Result<Response, ApiError> {
    let attachment = BoardService::new(&state.db, &state.storage)
        .get_attachment(attachment_id)
        .await?;

    let response = file::download(FsPath::new(&attachment.path), &attachment.filename)?;
    Ok(response)
}

/// DELETE /api/boards/attachments/:id - Delete an attachment.
pub async fn delete_attachment(
    State(state): State<Arc<AppState>>,
    Path(attachment_id): Path<i64>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    BoardService::new(&state.db, &state.storage)
        .delete_attachment(attachment_id)
        .await?;

    Ok(Json(ApiResponse::new(true)))
}

/// Read a text field from a multipart form.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field.text().await.map_err(|e| {
        tracing::error!("Failed to read multipart text field: {}", e);
        ApiError::bad_request("Invalid form field")
    })
}

/// Read a file field from a multipart form, enforcing the size limit.
///
/// A file part without a filename (an empty file input) is skipped.
pub(super) async fn read_upload(
    field: axum::extract::multipart::Field<'_>,
    max_size: u64,
) -> Result<Option<FileUpload>, ApiError> {
    let filename = match field.file_name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Ok(None),
    };
    let content_type = field.content_type().map(|s| s.to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| {
            tracing::error!("Failed to read file content: {}", e);
            ApiError::bad_request("Failed to read file")
        })?
        .to_vec();

    if data.len() as u64 > max_size {
        let max_mb = max_size / 1024 / 1024;
        return Err(ApiError::bad_request(format!(
            "File too large (max {max_mb}MB)"
        )));
    }

    Ok(Some(FileUpload::new(filename, content_type, data)))
}
