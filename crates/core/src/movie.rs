//! The catalog entry model shared between server and client.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One browsable title in the catalog.
///
/// Entries are immutable once fetched: the client only ever builds local
/// views over them, never writes back. `id` is unique within one fetched
/// snapshot and assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    /// Coarse brand tag used for top-level grouping (see [`crate::franchise`]).
    pub franchise: String,
    /// Finer genre tag used for secondary filtering. Free text.
    pub category: String,
    pub rating: f64,
    pub year: i64,
    pub synopsis: String,
    pub poster_url: String,
    pub backdrop_url: String,
    /// Hero-banner eligibility. Absent means not trending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trending: Option<bool>,
    /// "New" badge. Display-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Movie {
    /// The image shown in large-format contexts (hero slide, detail header).
    /// Falls back to the poster when no dedicated backdrop exists.
    pub fn backdrop_or_poster(&self) -> &str {
        if self.backdrop_url.is_empty() {
            &self.poster_url
        } else {
            &self.backdrop_url
        }
    }

    pub fn is_trending(&self) -> bool {
        self.is_trending.unwrap_or(false)
    }
}
