pub mod health;
pub mod movies;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies            filtered catalog listing (GET)
/// ```
///
/// Unmatched `/api/*` paths answer `404 { "error": "Not Found" }` instead of
/// falling through to the SPA document.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router()).fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}
