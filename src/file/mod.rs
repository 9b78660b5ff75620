//! File handling module for corkboard.
//!
//! Covers physical storage of uploads and HTTP download responses.

mod storage;
mod transfer;

pub use storage::FileStorage;
pub use transfer::{content_disposition_header, download, download_image};

/// A single binary upload received from a caller.
///
/// Kept separate from the persisted entity shapes; upload payloads never
/// travel inside `NewBoard` or `NewMember`.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Original filename as declared by the uploader.
    pub filename: String,
    /// Declared content type, when one was supplied.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

impl FileUpload {
    /// Create a new upload descriptor.
    pub fn new(
        filename: impl Into<String>,
        content_type: Option<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_upload_new() {
        let upload = FileUpload::new("photo.png", Some("image/png".to_string()), vec![1, 2, 3]);
        assert_eq!(upload.filename, "photo.png");
        assert_eq!(upload.content_type.as_deref(), Some("image/png"));
        assert_eq!(upload.data.len(), 3);
    }
}
