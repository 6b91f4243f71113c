//! Runtime settings for the server and its store.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Deployment environment; picks the default database file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
}

impl Environment {
    pub fn default_database_url(self) -> &'static str {
        match self {
            Environment::Development => "sqlite://data/lambda.db3",
            Environment::Testing => "sqlite://data/testing.db3",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        }
    }

    /// True for `sqlite::memory:` and `mode=memory` URLs, whose data lives only as long as a connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub run_migrations: bool,
    pub run_seeds: bool,
}

impl AppConfig {
    /// `host:port`, resolved by the listener (so host names are allowed).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
