//! The application state container and its transition function.
//!
//! All view-state mutation goes through [`ClientApp::dispatch`]: user
//! gestures and timer fires alike arrive as [`Action`]s, and each dispatch
//! reports which render passes the view layer must run. No state is mutated
//! anywhere else.

use marquee_core::filter::Dimension;
use marquee_core::movie::Movie;
use marquee_core::types::DbId;

use crate::hero::HeroBanner;
use crate::overlay::DetailOverlay;
use crate::store::CatalogStore;

/// A state transition, named for the user gesture or timer that produces it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Debounced search commit (the raw keystrokes go through
    /// [`crate::timer::Debouncer`], which emits this with the latest value).
    SetSearch(String),
    /// Franchise card click.
    SetFranchise(String),
    /// Category chip click.
    SetCategory(String),
    /// "All" chip click.
    ClearFilters,
    /// Card or hero "watch now" activation, keyed by entry identifier.
    OpenDetail(DbId),
    /// Modal close button.
    CloseDetail,
    /// Click somewhere on the open overlay; closes only when outside the
    /// inner content area.
    OverlayClick { inside_content: bool },
    /// Manual hero navigation.
    HeroNext,
    HeroPrev,
    /// Auto-advance timer fire.
    HeroTick,
}

/// Render passes requested by a dispatch. The runtime runs each at most once
/// per dispatch, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEffect {
    /// Re-render the movies grid from the visible subset.
    Grid,
    /// Refresh active-state indicators on filter chips and franchise cards.
    Indicators,
    /// Re-render hero slide states.
    Hero,
    /// Show/hide/refill the detail overlay.
    Overlay,
    /// Manual hero navigation resets the auto-advance timer.
    RestartRotation,
}

/// The whole client state: catalog store, detail overlay, hero banner.
#[derive(Debug)]
pub struct ClientApp {
    pub store: CatalogStore,
    pub overlay: DetailOverlay,
    pub hero: HeroBanner,
}

impl ClientApp {
    /// Build the initial state from a fetched catalog snapshot.
    pub fn new(catalog: Vec<Movie>) -> Self {
        let hero = HeroBanner::from_catalog(&catalog);
        Self {
            store: CatalogStore::new(catalog),
            overlay: DetailOverlay::default(),
            hero,
        }
    }

    /// Apply one action and report the render passes it requires.
    pub fn dispatch(&mut self, action: Action) -> Vec<RenderEffect> {
        match action {
            Action::SetSearch(term) => {
                self.store.set_filter(Dimension::Search, &term);
                vec![RenderEffect::Grid]
            }
            Action::SetFranchise(tag) => {
                self.store.set_filter(Dimension::Franchise, &tag);
                vec![RenderEffect::Grid, RenderEffect::Indicators]
            }
            Action::SetCategory(tag) => {
                self.store.set_filter(Dimension::Category, &tag);
                vec![RenderEffect::Grid, RenderEffect::Indicators]
            }
            Action::ClearFilters => {
                self.store.clear_filters();
                vec![RenderEffect::Grid, RenderEffect::Indicators]
            }
            Action::OpenDetail(id) => match self.store.find(id) {
                // Unknown identifier: silent no-op, no render.
                None => vec![],
                Some(movie) => {
                    let movie = movie.clone();
                    self.overlay.open(movie);
                    vec![RenderEffect::Overlay]
                }
            },
            Action::CloseDetail => {
                self.overlay.close();
                vec![RenderEffect::Overlay]
            }
            Action::OverlayClick { inside_content } => {
                let was_open = self.overlay.is_open();
                self.overlay.handle_click(inside_content);
                if was_open && !self.overlay.is_open() {
                    vec![RenderEffect::Overlay]
                } else {
                    vec![]
                }
            }
            Action::HeroNext => {
                self.hero.advance();
                vec![RenderEffect::Hero, RenderEffect::RestartRotation]
            }
            Action::HeroPrev => {
                self.hero.step_back();
                vec![RenderEffect::Hero, RenderEffect::RestartRotation]
            }
            Action::HeroTick => {
                self.hero.advance();
                vec![RenderEffect::Hero]
            }
        }
    }
}
