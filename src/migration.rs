//! Schema DDL for `users` and `posts`. Tables are created in dependency order and dropped in reverse.

use crate::error::AppError;
use sqlx::SqlitePool;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
  name VARCHAR(255) NOT NULL UNIQUE
)
"#;

const CREATE_POSTS: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
  id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
  text TEXT NOT NULL,
  user_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE ON UPDATE CASCADE
)
"#;

/// Create `users` then `posts`. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in [CREATE_USERS, CREATE_POSTS] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("migrations applied");
    Ok(())
}

/// Drop `posts` then `users`, discarding all data.
pub async fn rollback(pool: &SqlitePool) -> Result<(), AppError> {
    for table in ["posts", "users"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    tracing::info!("migrations rolled back");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::store::connect;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'posts') ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn migrate_is_idempotent_and_rollback_drops() {
        let pool = connect(&DatabaseConfig::in_memory()).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        assert_eq!(table_names(&pool).await, vec!["posts", "users"]);

        rollback(&pool).await.unwrap();
        assert!(table_names(&pool).await.is_empty());
    }
}
