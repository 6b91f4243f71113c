//! Row and payload types for users and posts.

mod post;
mod user;

pub use post::{NewPost, Post, UserPost};
pub use user::{NewUser, User};
