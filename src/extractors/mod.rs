//! Request extractors that gate handlers: the looked-up user and validated bodies.

pub mod body;
pub mod user;

pub use body::{PostBody, UserBody};
pub use user::ValidatedUser;
