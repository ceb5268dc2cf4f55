//! The client-side catalog store.
//!
//! Holds the full fetched snapshot and the current filter selection, and
//! recomputes the visible subset on every mutation. Filtering is entirely
//! local: the catalog is fetched exactly once at startup.

use marquee_core::filter::{apply_filters, Dimension, FilterSelection};
use marquee_core::movie::Movie;
use marquee_core::types::DbId;

#[derive(Debug)]
pub struct CatalogStore {
    all: Vec<Movie>,
    filters: FilterSelection,
    visible: Vec<Movie>,
}

impl CatalogStore {
    /// Wrap a fetched snapshot. The initial visible subset is the whole
    /// catalog (no filters active).
    pub fn new(all: Vec<Movie>) -> Self {
        let mut store = Self {
            all,
            filters: FilterSelection::default(),
            visible: Vec::new(),
        };
        store.recompute();
        store
    }

    pub fn all(&self) -> &[Movie] {
        &self.all
    }

    pub fn visible(&self) -> &[Movie] {
        &self.visible
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Look up an entry by identifier in the full snapshot.
    pub fn find(&self, id: DbId) -> Option<&Movie> {
        self.all.iter().find(|m| m.id == id)
    }

    /// Set one filter dimension.
    ///
    /// Re-selecting the active franchise or category toggles it off; the
    /// search dimension is always set directly and never toggles. The visible
    /// subset is recomputed either way.
    pub fn set_filter(&mut self, dimension: Dimension, value: &str) {
        match dimension {
            Dimension::Search => self.filters.search = value.to_string(),
            Dimension::Franchise => toggle(&mut self.filters.franchise, value),
            Dimension::Category => toggle(&mut self.filters.category, value),
        }
        self.recompute();
    }

    /// Reset all three dimensions to their defaults.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSelection::default();
        self.recompute();
    }

    /// Recompute the visible subset from scratch. Never patched
    /// incrementally, so the subset cannot drift from its inputs.
    fn recompute(&mut self) {
        self.visible = apply_filters(&self.all, &self.filters);
    }
}

fn toggle(slot: &mut Option<String>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(value.to_string());
    }
}
