//! The hero banner: a sampled rotation sequence plus its current position.

use marquee_core::hero::{sample_hero_entries, HeroRotation, SlideState};
use marquee_core::movie::Movie;

/// Rotation sequence and position. Rebuilt (resampled) every time the
/// catalog is rendered; the auto-advance timer lives in the runtime and
/// drives [`HeroBanner::advance`].
#[derive(Debug)]
pub struct HeroBanner {
    entries: Vec<Movie>,
    rotation: HeroRotation,
}

impl HeroBanner {
    /// Sample up to five entries from the catalog (trending-preferred) as the
    /// rotation sequence.
    pub fn from_catalog(catalog: &[Movie]) -> Self {
        let entries = sample_hero_entries(catalog);
        let rotation = HeroRotation::new(entries.len());
        Self { entries, rotation }
    }

    /// Whether the banner has anything to show. An empty banner is omitted
    /// from the rendered page entirely.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.rotation.active()
    }

    /// Slides paired with their current visual state.
    pub fn slides(&self) -> impl Iterator<Item = (&Movie, SlideState)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, m)| (m, self.rotation.slide_state(i)))
    }

    /// Advance one slide (auto-advance tick or manual "next").
    pub fn advance(&mut self) {
        self.rotation.next();
    }

    /// Step back one slide (manual "previous").
    pub fn step_back(&mut self) {
        self.rotation.prev();
    }
}
