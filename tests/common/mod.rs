//! Test helpers for Web API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use corkboard::web::handlers::AppState;
use corkboard::web::router::create_router;
use corkboard::{Database, FileStorage};

/// Upload size limit used in tests (1 MB).
pub const TEST_MAX_UPLOAD: u64 = 1024 * 1024;

/// A running test server with its backing state.
///
/// The temp directory owns the upload and avatar storage; dropping it
/// cleans everything up.
pub struct TestContext {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub temp_dir: TempDir,
}

/// Create a test server with an in-memory database and temp file storage.
pub async fn create_test_server() -> TestContext {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let storage =
        FileStorage::new(temp_dir.path().join("uploads")).expect("Failed to create storage");
    let avatar_dir = temp_dir.path().join("avatars");
    std::fs::create_dir_all(&avatar_dir).expect("Failed to create avatar dir");

    let state = Arc::new(AppState::new(db, storage, avatar_dir, TEST_MAX_UPLOAD));
    let router = create_router(state.clone(), &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestContext {
        server,
        state,
        temp_dir,
    }
}
