//! Handler for the catalog listing endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use marquee_core::fallback::fallback_catalog;
use marquee_db::repositories::{MovieQuery, MovieRepo};

use crate::response::MoviesResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/movies`. All optional; empty strings are
/// treated as absent so `?q=&franchise=` places no constraint.
#[derive(Debug, Deserialize)]
pub struct ListMoviesParams {
    pub q: Option<String>,
    pub franchise: Option<String>,
    pub category: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// List catalog entries matching the given filters.
///
/// This endpoint never fails hard: if the store cannot be queried (missing
/// table, unreachable file, malformed query) it logs a warning and answers
/// `200` with the fixed fallback dataset so the client always receives a
/// well-formed, non-empty catalog. The fallback is returned verbatim, not
/// filtered by the requested parameters; the `source` field marks it.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> Json<MoviesResponse> {
    let query = MovieQuery {
        q: non_empty(params.q),
        franchise: non_empty(params.franchise),
        category: non_empty(params.category),
    };

    match MovieRepo::list(&state.pool, &query).await {
        Ok(movies) => {
            tracing::debug!(count = movies.len(), ?query, "Listed movies");
            Json(MoviesResponse::live(movies))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Catalog query failed, serving fallback dataset");
            Json(MoviesResponse::fallback(fallback_catalog()))
        }
    }
}
