//! The in-memory filter engine.
//!
//! All filtering after the initial catalog fetch happens locally against the
//! full snapshot. The visible subset is a pure function of
//! `(all entries, filter selection)` and is recomputed in full on every
//! mutation, never incrementally patched.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// The three filter dimensions. Franchise and category toggle off when
/// re-selected; search is always set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Search,
    Franchise,
    Category,
}

/// The client's transient filter selection.
///
/// Franchise and category are independent: selecting one never clears the
/// other. All active dimensions combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Free-text search term. Empty means no constraint.
    pub search: String,
    /// At most one active franchise tag.
    pub franchise: Option<String>,
    /// At most one active category tag.
    pub category: Option<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.franchise.is_none() && self.category.is_none()
    }
}

/// Case-insensitive substring match against title OR synopsis.
pub fn matches_search(movie: &Movie, term: &str) -> bool {
    let needle = term.to_lowercase();
    movie.title.to_lowercase().contains(&needle)
        || movie.synopsis.to_lowercase().contains(&needle)
}

/// Whether a movie satisfies every active dimension of the selection.
pub fn matches(movie: &Movie, filters: &FilterSelection) -> bool {
    if !filters.search.is_empty() && !matches_search(movie, &filters.search) {
        return false;
    }
    if let Some(franchise) = &filters.franchise {
        if movie.franchise != *franchise {
            return false;
        }
    }
    if let Some(category) = &filters.category {
        if movie.category != *category {
            return false;
        }
    }
    true
}

/// Compute the visible subset, preserving input order.
pub fn apply_filters(all: &[Movie], filters: &FilterSelection) -> Vec<Movie> {
    all.iter().filter(|m| matches(m, filters)).cloned().collect()
}

/// Distinct non-empty category tags present in the catalog, in first-seen
/// order. Feeds the category chip bar.
pub fn distinct_categories(all: &[Movie]) -> Vec<String> {
    let mut seen = Vec::new();
    for movie in all {
        if !movie.category.is_empty() && !seen.contains(&movie.category) {
            seen.push(movie.category.clone());
        }
    }
    seen
}
