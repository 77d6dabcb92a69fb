use sqlx::PgPool;

use super::dto::ArtworkBody;
use super::repo_types::Artwork;

// Every query below filters on (id AND user_id) or on user_id alone, so one
// user can never observe or touch another user's rows.
impl Artwork {
    pub async fn create(
        db: &PgPool,
        user_id: i64,
        body: &ArtworkBody,
    ) -> Result<Artwork, sqlx::Error> {
        sqlx::query_as::<_, Artwork>(
            r#"
            INSERT INTO artworks (user_id, image, title, artist, year, category, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, image, title, artist, year, category, description
            "#,
        )
        .bind(user_id)
        .bind(&body.image)
        .bind(&body.title)
        .bind(&body.artist)
        .bind(body.year)
        .bind(&body.category)
        .bind(&body.description)
        .fetch_one(db)
        .await
    }

    /// Newest first; ids are monotonically increasing.
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> Result<Vec<Artwork>, sqlx::Error> {
        sqlx::query_as::<_, Artwork>(
            r#"
            SELECT id, user_id, image, title, artist, year, category, description
            FROM artworks
            WHERE user_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn get_by_id(
        db: &PgPool,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        sqlx::query_as::<_, Artwork>(
            r#"
            SELECT id, user_id, image, title, artist, year, category, description
            FROM artworks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Full replace of the mutable fields; `None` means no row matched the
    /// (id, owner) pair.
    pub async fn update(
        db: &PgPool,
        user_id: i64,
        id: i64,
        body: &ArtworkBody,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        sqlx::query_as::<_, Artwork>(
            r#"
            UPDATE artworks
            SET image = $1, title = $2, artist = $3, year = $4, category = $5, description = $6
            WHERE id = $7 AND user_id = $8
            RETURNING id, user_id, image, title, artist, year, category, description
            "#,
        )
        .bind(&body.image)
        .bind(&body.title)
        .bind(&body.artist)
        .bind(body.year)
        .bind(&body.category)
        .bind(&body.description)
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, user_id: i64, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
