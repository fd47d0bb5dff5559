use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::error;

use crate::core::error::{Error, ErrorKind};
use crate::core::types::{ArticleId, NewArticle};
use crate::query::types::SearchParams;

use super::router::AppState;
use super::types::MessageResponse;

const ARTICLE_NOT_FOUND: &str = "Article not found";
const SNAPSHOT_NOT_FOUND: &str = "No articles file found";

/// Error wrapper for API handlers
pub enum ApiError {
    ArticleNotFound,
    SnapshotNotFound,
    Internal(Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ArticleNotFound => (StatusCode::NOT_FOUND, ARTICLE_NOT_FOUND.to_string()),
            ApiError::SnapshotNotFound => (StatusCode::NOT_FOUND, SNAPSHOT_NOT_FOUND.to_string()),
            ApiError::Internal(e) => {
                error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Run blocking snapshot I/O off the async workers
async fn blocking<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::new(ErrorKind::Internal, format!("Snapshot task failed: {}", e)))?
}

/// Create an article
pub async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewArticle>,
) -> impl IntoResponse {
    let article = state.db.create_article(req);
    (StatusCode::CREATED, Json(article))
}

/// Search by keyword, tag and sort order
pub async fn search_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(state.db.search_articles(&params))
}

/// Get an article by ID
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_article_id(&id).ok_or(ApiError::ArticleNotFound)?;

    match state.db.get_article(ArticleId(id)) {
        Ok(article) => Ok(Json(article)),
        Err(e) if e.is_not_found() => Err(ApiError::ArticleNotFound),
        Err(e) => Err(ApiError::Internal(e)),
    }
}

/// Leading decimal digits of a path segment, so `5abc` names article 5.
/// Leading whitespace and a `+` sign are skipped. No digits, a `-` sign or
/// an overflowing value name no article.
fn parse_article_id(raw: &str) -> Option<u64> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Write every article to the snapshot file
pub async fn save_snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let worker = state.clone();
    blocking(move || worker.db.save_snapshot(&worker.storage))
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(MessageResponse::new("Articles saved to file")))
}

/// Replace every article with the snapshot file contents
pub async fn load_snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let worker = state.clone();
    match blocking(move || worker.db.load_snapshot(&worker.storage)).await {
        Ok(_) => Ok(Json(MessageResponse::new("Articles loaded from file"))),
        Err(e) if e.is_not_found() => Err(ApiError::SnapshotNotFound),
        Err(e) => Err(ApiError::Internal(e)),
    }
}
