//! Repository tests against a migrated in-memory SQLite database.

use marquee_db::repositories::{MovieQuery, MovieRepo};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn list_without_filters_returns_whole_catalog(pool: SqlitePool) {
    let movies = MovieRepo::list(&pool, &MovieQuery::default())
        .await
        .expect("listing should succeed");

    assert!(!movies.is_empty());

    // Ids are unique within one snapshot.
    let mut ids: Vec<_> = movies.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), movies.len());
}

#[sqlx::test(migrations = "./migrations")]
async fn franchise_filter_matches_exactly(pool: SqlitePool) {
    let query = MovieQuery {
        franchise: Some("pixar".to_string()),
        ..Default::default()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();

    assert!(!movies.is_empty());
    assert!(movies.iter().all(|m| m.franchise == "pixar"));
}

#[sqlx::test(migrations = "./migrations")]
async fn category_filter_matches_exactly(pool: SqlitePool) {
    let query = MovieQuery {
        category: Some("Documentary".to_string()),
        ..Default::default()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();

    assert!(!movies.is_empty());
    assert!(movies.iter().all(|m| m.category == "Documentary"));
}

#[sqlx::test(migrations = "./migrations")]
async fn search_matches_title_or_synopsis_case_insensitively(pool: SqlitePool) {
    // "mischief" appears only in Loki's synopsis.
    let query = MovieQuery {
        q: Some("MISCHIEF".to_string()),
        ..Default::default()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Loki");
}

#[sqlx::test(migrations = "./migrations")]
async fn filters_combine_with_and_semantics(pool: SqlitePool) {
    let query = MovieQuery {
        q: Some("galaxy".to_string()),
        franchise: Some("marvel".to_string()),
        category: Some("Action".to_string()),
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Guardians of the Galaxy Vol. 3");
}

#[sqlx::test(migrations = "./migrations")]
async fn unmatched_filters_return_empty_not_error(pool: SqlitePool) {
    let query = MovieQuery {
        franchise: Some("ghibli".to_string()),
        ..Default::default()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();
    assert!(movies.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn optional_flags_survive_the_row_mapping(pool: SqlitePool) {
    let movies = MovieRepo::list(&pool, &MovieQuery::default()).await.unwrap();

    let mandalorian = movies
        .iter()
        .find(|m| m.title == "The Mandalorian")
        .expect("seed data should contain The Mandalorian");
    assert_eq!(mandalorian.is_new, Some(true));
    assert_eq!(mandalorian.is_trending, None);

    let toy_story = movies
        .iter()
        .find(|m| m.title == "Toy Story 4")
        .expect("seed data should contain Toy Story 4");
    assert_eq!(toy_story.is_trending, Some(false));
}
