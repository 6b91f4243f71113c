//! Data access for `users`, including the posts-by-author projection.

use crate::error::AppError;
use crate::model::{NewUser, User, UserPost};
use sqlx::SqlitePool;

pub struct UserService;

impl UserService {
    /// All users, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let sql = "SELECT id, name FROM users ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one user by id. Returns None when no row matches.
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let sql = "SELECT id, name FROM users WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, User>(sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Posts written by `user_id`, each with the author's name as `postedBy`.
    /// Empty when the user has no posts or does not exist.
    pub async fn get_user_posts(pool: &SqlitePool, user_id: i64) -> Result<Vec<UserPost>, AppError> {
        let sql = r#"SELECT p.id, p.text, u.name AS "postedBy"
            FROM posts AS p
            JOIN users AS u ON u.id = p.user_id
            WHERE p.user_id = ?
            ORDER BY p.id"#;
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, UserPost>(sql).bind(user_id).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert a user and read the new row back by its generated id.
    pub async fn insert(pool: &SqlitePool, user: &NewUser) -> Result<Option<User>, AppError> {
        let sql = "INSERT INTO users (name) VALUES (?)";
        tracing::debug!(sql = %sql, name = %user.name, "query");
        let done = sqlx::query(sql).bind(&user.name).execute(pool).await?;
        Self::get_by_id(pool, done.last_insert_rowid()).await
    }

    /// Rename a user. Returns the number of rows changed (0 when the id is unknown).
    pub async fn update(pool: &SqlitePool, id: i64, changes: &NewUser) -> Result<u64, AppError> {
        let sql = "UPDATE users SET name = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(&changes.name).bind(id).execute(pool).await?;
        Ok(done.rows_affected())
    }

    /// Delete a user and, through the foreign key, their posts. Returns rows deleted from `users`.
    pub async fn remove(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let sql = "DELETE FROM users WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(done.rows_affected())
    }
}
