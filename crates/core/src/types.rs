/// Catalog identifiers are SQLite INTEGER primary keys.
pub type DbId = i64;
