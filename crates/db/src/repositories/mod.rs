//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&DbPool` as the first argument.

pub mod movie_repo;

pub use movie_repo::{MovieQuery, MovieRepo};
