//! Data access per entity, plus request body validation.

mod posts;
mod users;
mod validation;
pub use posts::PostService;
pub use users::UserService;
pub use validation::RequestValidator;
