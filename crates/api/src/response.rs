//! Response envelope for the catalog endpoint.
//!
//! The wire contract is `{ ok, source, movies }`. `ok` is always `true` on
//! this path: query failures degrade to fallback data rather than an error
//! status. `source` tells the client whether it received live store data or
//! the fixed fallback catalog.

use marquee_core::movie::Movie;
use serde::Serialize;

/// Where the returned catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// The backing store answered the query.
    Live,
    /// The store was unreachable or unqueryable; this is the fixed
    /// demonstration dataset, returned verbatim and unfiltered.
    Fallback,
}

/// Body of `GET /api/movies`.
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub ok: bool,
    pub source: CatalogSource,
    pub movies: Vec<Movie>,
}

impl MoviesResponse {
    pub fn live(movies: Vec<Movie>) -> Self {
        Self {
            ok: true,
            source: CatalogSource::Live,
            movies,
        }
    }

    pub fn fallback(movies: Vec<Movie>) -> Self {
        Self {
            ok: true,
            source: CatalogSource::Fallback,
            movies,
        }
    }
}
