//! Web server startup for corkboard.

use std::sync::Arc;

use tracing::info;

use super::handlers::AppState;
use super::router::create_router;
use crate::config::ServerConfig;
use crate::Result;

/// Bind and serve the Web API until the process is stopped.
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> Result<()> {
    let router = create_router(state, &config.cors_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Web API listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
