//! Middleware gates: global request logging and per-route user id validation.

mod logger;
mod user_id;

pub use logger::request_logger;
pub use user_id::validate_user_id;
