use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::core::database::Database;
use crate::storage::layout::StorageLayout;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub db: Arc<Database>,
    pub storage: StorageLayout,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Articles
        .route("/articles", post(create_article))
        .route("/articles/search", get(search_articles))
        .route("/articles/:id", get(get_article))
        // Snapshot
        .route("/save", post(save_snapshot))
        .route("/load", post(load_snapshot))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
