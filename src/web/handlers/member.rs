//! Member handlers for the Web API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    response::Response,
    Json,
};
use tracing::info;

use crate::file::{self, FileUpload};
use crate::member::{MemberJoin, MemberService};
use crate::web::dto::{ApiResponse, MemberResponse};
use crate::web::error::ApiError;
use crate::web::handlers::board::read_upload;
use crate::web::handlers::AppState;

/// POST /api/members - Register a new member.
///
/// Request body: multipart/form-data with "username", "password",
/// "nickname", optional "email" and optional "avatar" file.
pub async fn join(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    let mut username = String::new();
    let mut password = String::new();
    let mut nickname = String::new();
    let mut email: Option<String> = None;
    let mut avatar: Option<FileUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "username" => username = read_text(field).await?,
            "password" => password = read_text(field).await?,
            "nickname" => nickname = read_text(field).await?,
            "email" => {
                let value = read_text(field).await?;
                if !value.trim().is_empty() {
                    email = Some(value);
                }
            }
            "avatar" => avatar = read_upload(field, state.max_upload_size).await?,
            _ => {}
        }
    }

    info!("Registering member '{}'", username);

    let member = MemberService::new(&state.db, &state.avatar_dir)
        .join(MemberJoin::new(username, password, nickname, email), avatar)
        .await?;

    Ok(Json(ApiResponse::new(member.into())))
}

/// GET /api/members/check/:username - Check if a username is taken.
pub async fn check_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    let taken = MemberService::new(&state.db, &state.avatar_dir)
        .check_duplicate(&username)
        .await?;

    Ok(Json(ApiResponse::new(taken)))
}

/// GET /api/members/:username/avatar - Fetch a member's avatar image.
///
/// Members without an uploaded avatar get the shared default image.
pub async fn get_avatar(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let path = MemberService::new(&state.db, &state.avatar_dir).avatar_file(&username);

    let response = file::download_image(&path)?;
    Ok(response)
}

/// Read a text field from a multipart form.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field.text().await.map_err(|e| {
        tracing::error!("Failed to read multipart text field: {}", e);
        ApiError::bad_request("Invalid form field")
    })
}
