//! Users and their posts over HTTP, backed by SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, Environment};
pub use error::{AppError, ConfigError, ErrorBody};
pub use migration::{apply_migrations, rollback};
pub use model::{NewPost, NewUser, Post, User, UserPost};
pub use routes::{app, common_routes, user_routes};
pub use seed::{run_seeds, SEED_POSTS, SEED_USERS};
pub use service::{PostService, RequestValidator, UserService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
