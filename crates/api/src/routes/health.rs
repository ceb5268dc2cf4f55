use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    world: &'static str,
}

/// Liveness probe. Pings the database pool; the `world` field identifies
/// the service.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    marquee_db::health_check(&state.pool).await?;
    Ok(Json(HealthResponse {
        ok: true,
        world: "marquee",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
