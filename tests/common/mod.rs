#![allow(dead_code)]

use posts_api::{apply_migrations, connect, run_seeds, DatabaseConfig};
use sqlx::SqlitePool;

/// Fresh in-memory store with the schema applied and fixtures loaded.
pub async fn seeded_pool() -> SqlitePool {
    let pool = migrated_pool().await;
    run_seeds(&pool).await.expect("seed");
    pool
}

/// Fresh in-memory store with the schema applied and no rows.
pub async fn migrated_pool() -> SqlitePool {
    let pool = connect(&DatabaseConfig::in_memory()).await.expect("connect");
    apply_migrations(&pool).await.expect("migrate");
    pool
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count")
}
