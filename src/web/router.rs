//! Router configuration for the Web API.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{board, member, AppState};

/// Create the main API router.
pub fn create_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let board_routes = Router::new()
        .route("/", get(board::list_boards).post(board::create_board))
        .route("/page", get(board::page_boards))
        .route(
            "/:id",
            get(board::get_board)
                .put(board::update_board)
                .delete(board::delete_board),
        )
        .route("/attachments/:id", delete(board::delete_attachment))
        .route(
            "/attachments/:id/download",
            get(board::download_attachment),
        );

    let member_routes = Router::new()
        .route("/", post(member::join))
        .route("/check/:username", get(member::check_username))
        .route("/:username/avatar", get(member::get_avatar));

    let api_routes = Router::new()
        .nest("/boards", board_routes)
        .nest("/members", member_routes);

    // Allow bodies up to the configured upload size plus form overhead.
    let body_limit = (state.max_upload_size as usize).saturating_mul(2) + 64 * 1024;

    Router::new()
        .nest("/api", api_routes)
        .merge(health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origins))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// Build the CORS layer from configured origins. Empty means any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
    ];

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(Any)
}

/// Health check router.
fn health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
