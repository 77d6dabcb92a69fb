use sqlx::PgPool;

use super::dto::UpdateProfileRequest;
use super::repo_types::User;

impl User {
    /// Case-sensitive exact match, mirroring the uniqueness precondition
    /// applied at registration.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, first_name, last_name, profile_pic, join_date
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, first_name, last_name, profile_pic, join_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password, first_name, last_name, profile_pic, join_date
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Full replace of the mutable profile fields in one statement.
    pub async fn update_profile(
        db: &PgPool,
        id: i64,
        profile: &UpdateProfileRequest,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, username = $3, email = $4, profile_pic = $5
            WHERE id = $6
            RETURNING id, username, email, password, first_name, last_name, profile_pic, join_date
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.username)
        .bind(&profile.email)
        .bind(&profile.profile_pic)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Rewrites the stored digest; returns the number of rows touched.
    pub async fn update_password(
        db: &PgPool,
        id: i64,
        password_hash: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
