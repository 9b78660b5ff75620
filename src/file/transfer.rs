//! HTTP file transfer helpers for corkboard.
//!
//! Builds download responses from on-disk files. The display name, not the
//! stored name, drives the content-disposition header so storage layout
//! never leaks to callers.

use std::fs;
use std::io;
use std::path::Path;

use axum::body::Body;
use axum::http::header;
use axum::response::Response;

use crate::{CorkboardError, Result};

/// Build an attachment download response for a file on disk.
///
/// Fails with NotFound when the file does not exist. The content type is
/// guessed from the display name.
pub fn download(path: &Path, display_name: &str) -> Result<Response> {
    let content = read_file(path)?;

    let content_type = mime_guess::from_path(display_name)
        .first_or_octet_stream()
        .to_string();

    build_response(
        content,
        &content_type,
        Some(&content_disposition_header(display_name)),
    )
}

/// Build an inline image response for a file on disk.
///
/// Avatar callers pre-resolve the path against a fallback image, so for
/// that use case this never fails with NotFound.
pub fn download_image(path: &Path) -> Result<Response> {
    let content = read_file(path)?;

    let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();

    build_response(content, &content_type, None)
}

/// Generate a safe Content-Disposition header value for downloads.
///
/// Control characters are stripped (header injection), quotes and
/// backslashes replaced, and non-ASCII names carried through an RFC 5987
/// `filename*` parameter.
pub fn content_disposition_header(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' => '_',
            '\\' => '_',
            _ => c,
        })
        .collect();

    if filename.is_ascii() && !filename.chars().any(|c| c.is_control() || c == '"' || c == '\\') {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let encoded = urlencoding::encode(filename);
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized, encoded
    )
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CorkboardError::NotFound(format!("file {}", path.display())))
        }
        Err(e) => Err(e.into()),
    }
}

fn build_response(
    content: Vec<u8>,
    content_type: &str,
    disposition: Option<&str>,
) -> Result<Response> {
    let mut builder = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content.len());

    if let Some(disposition) = disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, disposition);
    }

    builder
        .body(Body::from(content))
        .map_err(|e| CorkboardError::Internal(e.to_string()))
}
