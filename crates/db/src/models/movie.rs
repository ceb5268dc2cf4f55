//! Row model for the `movies` table.

use marquee_core::movie::Movie;
use marquee_core::types::DbId;
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// Kept separate from [`Movie`] so the shared domain type stays free of sqlx;
/// conversion is a straight field copy.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub franchise: String,
    pub category: String,
    pub rating: f64,
    pub year: i64,
    pub synopsis: String,
    pub poster_url: String,
    pub backdrop_url: String,
    pub is_trending: Option<bool>,
    pub is_new: Option<bool>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            franchise: row.franchise,
            category: row.category,
            rating: row.rating,
            year: row.year,
            synopsis: row.synopsis,
            poster_url: row.poster_url,
            backdrop_url: row.backdrop_url,
            is_trending: row.is_trending,
            is_new: row.is_new,
        }
    }
}
