use serde::{Deserialize, Serialize};

/// A row of `posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
}

/// Fields accepted when creating or updating a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub text: String,
    pub user_id: i64,
}

impl NewPost {
    pub fn new(text: impl Into<String>, user_id: i64) -> Self {
        NewPost {
            text: text.into(),
            user_id,
        }
    }
}

/// A post joined with its author's name. Read-only; carries no `user_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserPost {
    pub id: i64,
    pub text: String,
    #[serde(rename = "postedBy")]
    #[sqlx(rename = "postedBy")]
    pub posted_by: String,
}
