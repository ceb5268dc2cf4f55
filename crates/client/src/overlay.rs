//! The detail overlay (modal) state.

use marquee_core::movie::Movie;

/// Modal detail view over one catalog entry. Closed by default.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    movie: Option<Movie>,
}

impl DetailOverlay {
    pub fn is_open(&self) -> bool {
        self.movie.is_some()
    }

    /// The entry currently presented, when open.
    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    pub fn open(&mut self, movie: Movie) {
        self.movie = Some(movie);
    }

    pub fn close(&mut self) {
        self.movie = None;
    }

    /// A click on the overlay closes it only when it lands outside the inner
    /// content area; clicks inside do not propagate to the close handler.
    pub fn handle_click(&mut self, inside_content: bool) {
        if !inside_content {
            self.close();
        }
    }
}
