//! API handlers for the Web API.

pub mod board;
pub mod member;

use std::path::PathBuf;

use crate::db::Database;
use crate::file::FileStorage;

/// State shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Storage for board attachments.
    pub storage: FileStorage,
    /// Directory holding member avatars.
    pub avatar_dir: PathBuf,
    /// Maximum accepted upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create the shared state.
    pub fn new(
        db: Database,
        storage: FileStorage,
        avatar_dir: impl Into<PathBuf>,
        max_upload_size: u64,
    ) -> Self {
        Self {
            db,
            storage,
            avatar_dir: avatar_dir.into(),
            max_upload_size,
        }
    }
}
