//! The view synchronizer: deterministic mapping from client state to HTML.
//!
//! Markup generation is decoupled from event wiring: interactive elements
//! carry `data-*` attributes (entry identifiers, franchise/category tags,
//! hero directions), and the runtime's dispatcher maps activations of those
//! attributes to [`crate::app::Action`]s. Nothing here mutates state.

use marquee_core::filter::{distinct_categories, FilterSelection};
use marquee_core::franchise::{franchise_label, KNOWN_FRANCHISES};
use marquee_core::hero::SlideState;
use marquee_core::movie::Movie;

use crate::app::ClientApp;
use crate::hero::HeroBanner;
use crate::overlay::DetailOverlay;

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Active/selected flags for every filter control, derived purely from
/// `(category chips, filter selection)`. Applying the same state twice is a
/// visual no-op, so the refresh may run any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorState {
    /// The "All" chip is active iff no category filter is set.
    pub all_chip_active: bool,
    /// `(category tag, active)` per chip, in chip order.
    pub category_chips: Vec<(String, bool)>,
    /// `(franchise tag, selected)` per card, in strip order.
    pub franchise_cards: Vec<(String, bool)>,
}

/// Compute the indicator state for the current filters.
pub fn indicator_state(categories: &[String], filters: &FilterSelection) -> IndicatorState {
    IndicatorState {
        all_chip_active: filters.category.is_none(),
        category_chips: categories
            .iter()
            .map(|c| (c.clone(), filters.category.as_deref() == Some(c)))
            .collect(),
        franchise_cards: KNOWN_FRANCHISES
            .iter()
            .map(|f| (f.to_string(), filters.franchise.as_deref() == Some(*f)))
            .collect(),
    }
}

/// Full structural render: navbar, hero, franchise strip, category chips,
/// grid container, hidden detail modal. Called at startup and on catalog
/// replace; partial passes handle everything afterwards.
pub fn render_page(app: &ClientApp) -> String {
    format!(
        "{}\n<div class=\"main-wrapper\">\n{}{}{}<div id=\"movies-container\">\n{}</div>\n</div>\n{}",
        render_navbar(),
        render_hero(&app.hero),
        render_franchise_nav(),
        render_filter_bar(app.store.all()),
        render_grid(app.store.visible(), app.store.filters()),
        render_modal(&app.overlay),
    )
}

pub fn render_navbar() -> String {
    "<nav class=\"navbar\">\n\
         <div class=\"nav-logo\"><h1>MARQUEE</h1></div>\n\
         <div class=\"search-container\">\n\
             <input type=\"text\" class=\"search-input\" id=\"search-input\" \
                    placeholder=\"Search by title or synopsis\">\n\
         </div>\n\
     </nav>\n"
        .to_string()
}

/// Hero slider. Omitted entirely when the rotation sequence is empty.
pub fn render_hero(hero: &HeroBanner) -> String {
    if hero.is_empty() {
        return String::new();
    }

    let slides: String = hero
        .slides()
        .map(|(movie, state)| {
            let class = match state {
                SlideState::Active => " active",
                SlideState::Previous => " previous",
                SlideState::Default => "",
            };
            format!(
                "<div class=\"hero-slide{class}\" style=\"background-image: url('{image}')\">\n\
                     <div class=\"hero-content\">\n\
                         <div class=\"hero-logo\">{title}</div>\n\
                         <p class=\"hero-desc\">{synopsis}</p>\n\
                         <button class=\"btn-play\" data-movie-id=\"{id}\">WATCH NOW</button>\n\
                     </div>\n\
                 </div>\n",
                image = escape(movie.backdrop_or_poster()),
                title = escape(&movie.title),
                synopsis = escape(&movie.synopsis),
                id = movie.id,
            )
        })
        .collect();

    format!(
        "<div class=\"hero-slider\">\n{slides}\
             <button class=\"hero-nav\" data-hero=\"prev\">&lt;</button>\n\
             <button class=\"hero-nav\" data-hero=\"next\">&gt;</button>\n\
         </div>\n"
    )
}

/// Franchise selector strip: the fixed list of known brands, independent of
/// what the catalog contains.
pub fn render_franchise_nav() -> String {
    let cards: String = KNOWN_FRANCHISES
        .iter()
        .map(|tag| {
            format!(
                "<div class=\"franchise-card\" data-franchise=\"{tag}\">\n\
                     <div class=\"franchise-logo\">{label}</div>\n\
                 </div>\n",
                label = escape(franchise_label(tag)),
            )
        })
        .collect();
    format!("<div class=\"franchise-nav\">\n{cards}</div>\n")
}

/// Category chip bar: "All" plus the distinct categories present in the
/// full catalog, in first-seen order.
pub fn render_filter_bar(all: &[Movie]) -> String {
    let chips: String = distinct_categories(all)
        .iter()
        .map(|cat| {
            format!(
                "<div class=\"filter-chip\" data-category=\"{cat}\">{label}</div>\n",
                cat = escape(cat),
                label = escape(cat),
            )
        })
        .collect();
    format!(
        "<div class=\"filter-bar\">\n\
             <div class=\"filter-chip active\" data-clear-filters>All</div>\n\
         {chips}</div>\n"
    )
}

/// Grid-only render pass: replaces the contents of `#movies-container`.
pub fn render_grid(visible: &[Movie], filters: &FilterSelection) -> String {
    if visible.is_empty() {
        return "<div class=\"no-results\">No movies found.</div>\n".to_string();
    }

    let heading = match &filters.franchise {
        Some(franchise) => franchise.to_uppercase(),
        None => "Recommended For You".to_string(),
    };

    let cards: String = visible
        .iter()
        .map(|movie| {
            format!(
                "<div class=\"movie-card\" data-movie-id=\"{id}\">\n\
                     <img src=\"{poster}\" alt=\"{title}\" loading=\"lazy\">\n\
                 </div>\n",
                id = movie.id,
                poster = escape(&movie.poster_url),
                title = escape(&movie.title),
            )
        })
        .collect();

    format!(
        "<h2 class=\"section-title\">{heading}</h2>\n\
         <div class=\"movies-grid\">\n{cards}</div>\n",
        heading = escape(&heading),
    )
}

/// Detail modal. Marked open and populated when an entry is presented;
/// otherwise rendered closed and empty.
pub fn render_modal(overlay: &DetailOverlay) -> String {
    let (open_class, inner) = match overlay.movie() {
        None => ("", String::new()),
        Some(movie) => (
            " open",
            format!(
                "<div class=\"modal-header\" style=\"background-image: url('{image}')\"></div>\n\
                 <div class=\"modal-body\">\n\
                     <h2 class=\"modal-title\">{title}</h2>\n\
                     <div class=\"modal-meta\">\n\
                         <span>{year}</span><span>&bull;</span>\
                         <span>{category}</span><span>&bull;</span>\
                         <span>&#9733; {rating}</span>\n\
                     </div>\n\
                     <p class=\"modal-description\">{synopsis}</p>\n\
                 </div>\n",
                image = escape(movie.backdrop_or_poster()),
                title = escape(&movie.title),
                year = movie.year,
                category = escape(&movie.category),
                rating = movie.rating,
                synopsis = escape(&movie.synopsis),
            ),
        ),
    };

    format!(
        "<div class=\"modal-overlay{open_class}\" id=\"detail-modal\">\n\
             <div class=\"modal-content\">\n\
                 <button class=\"modal-close\" data-close-modal>&times;</button>\n\
                 <div id=\"modal-inner\">\n{inner}</div>\n\
             </div>\n\
         </div>\n"
    )
}
