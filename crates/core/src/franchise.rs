//! Franchise tag constants.
//!
//! The franchise navigation strip is a fixed list of known brands,
//! independent of what the fetched catalog actually contains. The tag set is
//! open in the data model (`Movie::franchise` is free text) but these are the
//! tags the UI knows how to present.

/// Known franchise tags, in navigation-strip order.
pub const KNOWN_FRANCHISES: &[&str] = &["disney", "pixar", "marvel", "starwars", "natgeo"];

/// Display label for a franchise tag. Unknown tags fall back to the raw tag.
pub fn franchise_label(tag: &str) -> &str {
    match tag {
        "disney" => "Disney",
        "pixar" => "Pixar",
        "marvel" => "Marvel",
        "starwars" => "Star Wars",
        "natgeo" => "National Geographic",
        other => other,
    }
}

/// Check whether a tag is one of the known franchise brands.
pub fn is_known_franchise(tag: &str) -> bool {
    KNOWN_FRANCHISES.contains(&tag)
}
