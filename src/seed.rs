//! Fixture data: wipes both tables, resets their id counters, then loads users and posts.

use crate::error::AppError;
use sqlx::SqlitePool;

pub const SEED_USERS: &[&str] = &[
    "Frodo Baggins",
    "Samwise Gamgee",
    "Meriadoc Brandybuck",
    "Peregrin Took",
    "Mithrandir",
    "Boromir",
    "Legolas",
    "Gimli",
    "Aragorn",
];

/// `(user_id, text)` pairs; user ids refer to positions in `SEED_USERS` (1-based).
pub const SEED_POSTS: &[(i64, &str)] = &[
    (1, "I wish the Ring had never come to me. I wish none of this had happened."),
    (5, "All we have to decide is what to do with the time that is given us."),
    (3, "It's a dangerous business, Frodo, going out your door."),
    (5, "A wizard is never late, nor is he early. He arrives precisely when he means to."),
    (2, "Potatoes! Boil 'em, mash 'em, stick 'em in a stew."),
    (4, "Fool of a Took! Throw yourself in next time and rid us of your stupidity."),
    (6, "One does not simply walk into Mordor."),
    (2, "There's some good in this world, Mr. Frodo, and it's worth fighting for."),
    (7, "They're taking the Hobbits to Isengard!"),
    (8, "Nobody tosses a Dwarf."),
    (9, "A day may come when the courage of Men fails, but it is not this day."),
    (1, "I will take the Ring, though I do not know the way."),
];

/// Delete every row from both tables and restart their AUTOINCREMENT sequences.
pub async fn clean(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("DELETE FROM posts").execute(pool).await?;
    sqlx::query("DELETE FROM users").execute(pool).await?;
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('users', 'posts')")
        .execute(pool)
        .await?;
    Ok(())
}

/// Replace all data with the fixtures. Users get ids 1..=9 in `SEED_USERS` order.
pub async fn run_seeds(pool: &SqlitePool) -> Result<(), AppError> {
    clean(pool).await?;
    for name in SEED_USERS {
        sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(*name)
            .execute(pool)
            .await?;
    }
    for (user_id, text) in SEED_POSTS {
        sqlx::query("INSERT INTO posts (text, user_id) VALUES (?, ?)")
            .bind(*text)
            .bind(*user_id)
            .execute(pool)
            .await?;
    }
    tracing::info!(users = SEED_USERS.len(), posts = SEED_POSTS.len(), "seeds loaded");
    Ok(())
}
