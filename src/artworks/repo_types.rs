use serde::Serialize;
use sqlx::FromRow;

/// Artwork record; `user_id` is the owning user and never changes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Artwork {
    pub id: i64,
    pub user_id: i64,
    pub image: String,
    pub title: String,
    pub artist: String,
    pub year: Option<i32>,
    pub category: String,
    pub description: Option<String>,
}
