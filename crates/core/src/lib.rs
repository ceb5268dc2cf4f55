//! Marquee domain logic.
//!
//! Pure, dependency-light modules shared by the API server and the browsing
//! client: the catalog entry model, the filter engine, the deterministic
//! fallback catalog, franchise tag constants, and hero-rotation math.

pub mod fallback;
pub mod filter;
pub mod franchise;
pub mod hero;
pub mod movie;
pub mod types;
