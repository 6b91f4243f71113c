//! Data access for `posts`.

use crate::error::AppError;
use crate::model::{NewPost, Post};
use sqlx::SqlitePool;

pub struct PostService;

impl PostService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Post>, AppError> {
        let sql = "SELECT id, text, user_id FROM posts ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Post>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>, AppError> {
        let sql = "SELECT id, text, user_id FROM posts WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Post>(sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Insert a post and read it back. Fails with a constraint violation when `user_id` is unknown.
    pub async fn insert(pool: &SqlitePool, post: &NewPost) -> Result<Option<Post>, AppError> {
        let sql = "INSERT INTO posts (text, user_id) VALUES (?, ?)";
        tracing::debug!(sql = %sql, user_id = post.user_id, "query");
        let done = sqlx::query(sql)
            .bind(&post.text)
            .bind(post.user_id)
            .execute(pool)
            .await?;
        Self::get_by_id(pool, done.last_insert_rowid()).await
    }

    pub async fn update(pool: &SqlitePool, id: i64, changes: &NewPost) -> Result<u64, AppError> {
        let sql = "UPDATE posts SET text = ?, user_id = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql)
            .bind(&changes.text)
            .bind(changes.user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(done.rows_affected())
    }

    pub async fn remove(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let sql = "DELETE FROM posts WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(done.rows_affected())
    }
}
