use axum::http::{Method, Uri};
use tracing::debug;

use crate::error::AppError;

/// Fallback for unknown paths and for non-GET methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    debug!(%method, %uri, "No route matched");
    AppError::NotFound
}
