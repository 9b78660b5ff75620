use std::sync::Arc;

use tracing::info;

use corkboard::web::handlers::AppState;
use corkboard::{Config, Database, FileStorage};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = corkboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("corkboard - bulletin board backend");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    let storage = match FileStorage::new(&config.files.upload_path) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!(
                "Failed to prepare upload directory {}: {e}",
                config.files.upload_path
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&config.files.avatar_path) {
        eprintln!(
            "Failed to prepare avatar directory {}: {e}",
            config.files.avatar_path
        );
        std::process::exit(1);
    }

    let state = Arc::new(AppState::new(
        db,
        storage,
        config.files.avatar_path.clone(),
        config.files.max_upload_size_bytes(),
    ));

    if let Err(e) = corkboard::web::server::serve(&config.server, state).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
