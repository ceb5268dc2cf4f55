//! Repository for the `movies` table.

use marquee_core::movie::Movie;
use sqlx::QueryBuilder;

use crate::models::movie::MovieRow;
use crate::DbPool;

/// Optional filter parameters for a catalog listing. Absent fields place no
/// constraint on that dimension.
#[derive(Debug, Clone, Default)]
pub struct MovieQuery {
    /// Substring match against title OR synopsis.
    pub q: Option<String>,
    /// Exact franchise tag match.
    pub franchise: Option<String>,
    /// Exact category tag match.
    pub category: Option<String>,
}

/// Provides read operations for the movie catalog.
pub struct MovieRepo;

impl MovieRepo {
    /// List catalog entries matching every present filter, in natural
    /// storage order.
    ///
    /// SQLite `LIKE` is case-insensitive for ASCII, which gives the search
    /// dimension the same semantics as the client's local filter.
    pub async fn list(pool: &DbPool, query: &MovieQuery) -> Result<Vec<Movie>, sqlx::Error> {
        let mut builder = QueryBuilder::new(
            "SELECT id, title, franchise, category, rating, year, synopsis, \
             poster_url, backdrop_url, is_trending, is_new FROM movies WHERE 1=1",
        );

        if let Some(franchise) = &query.franchise {
            builder.push(" AND franchise = ").push_bind(franchise);
        }
        if let Some(category) = &query.category {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(q) = &query.q {
            let pattern = format!("%{q}%");
            builder
                .push(" AND (title LIKE ")
                .push_bind(pattern.clone())
                .push(" OR synopsis LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        let rows: Vec<MovieRow> = builder.build_query_as().fetch_all(pool).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
