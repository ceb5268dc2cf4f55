//! Hero banner rotation math.
//!
//! The hero banner presents a small sampled subset of the catalog, one slide
//! at a time. The index arithmetic and slide-state mapping live here as pure
//! functions; the client owns the timer that drives them.

use rand::seq::IndexedRandom;

use crate::movie::Movie;

/// Maximum number of slides in a rotation sequence.
pub const MAX_HERO_SLIDES: usize = 5;

/// Auto-advance interval in milliseconds.
pub const ROTATION_INTERVAL_MS: u64 = 5000;

/// Visual state of a single slide. Exactly one slide is `Active` at any
/// time; the slide it replaced is `Previous` to support a directional
/// transition, and everything else is `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Active,
    Previous,
    Default,
}

/// Rotation position over a sequence of `len` slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRotation {
    len: usize,
    active: usize,
    previous: Option<usize>,
}

impl HeroRotation {
    /// Start a rotation over `len` slides with the first slide active.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            previous: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Advance to the next slide, wrapping past the end.
    pub fn next(&mut self) {
        if self.len < 2 {
            return;
        }
        self.previous = Some(self.active);
        self.active = (self.active + 1) % self.len;
    }

    /// Step back to the previous slide, wrapping past the start.
    pub fn prev(&mut self) {
        if self.len < 2 {
            return;
        }
        self.previous = Some(self.active);
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Visual state of slide `index`.
    pub fn slide_state(&self, index: usize) -> SlideState {
        if index == self.active {
            SlideState::Active
        } else if Some(index) == self.previous {
            SlideState::Previous
        } else {
            SlideState::Default
        }
    }
}

/// Sample up to [`MAX_HERO_SLIDES`] entries for the rotation sequence.
///
/// Trending-flagged entries are preferred: when any exist the sample is drawn
/// from them alone, otherwise from the whole catalog.
pub fn sample_hero_entries(catalog: &[Movie]) -> Vec<Movie> {
    let trending: Vec<&Movie> = catalog.iter().filter(|m| m.is_trending()).collect();
    let pool: Vec<&Movie> = if trending.is_empty() {
        catalog.iter().collect()
    } else {
        trending
    };

    pool.choose_multiple(&mut rand::rng(), MAX_HERO_SLIDES)
        .map(|m| (*m).clone())
        .collect()
}
