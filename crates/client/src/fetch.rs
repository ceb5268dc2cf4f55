//! One-shot catalog fetch.
//!
//! The client requests the full catalog exactly once at startup; all
//! filtering afterwards is local. Any failure along the way (unreachable
//! server, non-OK status, malformed body, `ok: false`) substitutes the fixed
//! local dataset so the view never renders empty over a network problem.

use marquee_core::fallback::fallback_catalog;
use marquee_core::movie::Movie;
use serde::Deserialize;

/// Client-side mirror of the `GET /api/movies` envelope. Unknown fields are
/// ignored so the client tolerates server-side additions.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    ok: bool,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    movies: Vec<Movie>,
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("server answered ok=false")]
    NotOk,
}

async fn try_fetch(base_url: &str) -> Result<CatalogEnvelope, FetchError> {
    let envelope: CatalogEnvelope = reqwest::get(format!("{base_url}/api/movies"))
        .await?
        .error_for_status()?
        .json()
        .await?;

    if !envelope.ok {
        return Err(FetchError::NotOk);
    }
    Ok(envelope)
}

/// Fetch the full catalog, degrading to the local fallback dataset on any
/// failure. Never errors: the caller always receives a renderable catalog.
pub async fn fetch_catalog(base_url: &str) -> Vec<Movie> {
    match try_fetch(base_url).await {
        Ok(envelope) => {
            if envelope.source.as_deref() == Some("fallback") {
                tracing::warn!("Server is serving its fallback dataset (store degraded)");
            }
            tracing::debug!(count = envelope.movies.len(), "Catalog fetched");
            envelope.movies
        }
        Err(err) => {
            tracing::warn!(error = %err, "Catalog fetch failed, using local fallback dataset");
            fallback_catalog()
        }
    }
}
