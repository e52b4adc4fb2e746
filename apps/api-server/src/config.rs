//! Server configuration from environment variables.

use std::env;

use tribe_infra::database::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `MONGODB_URI` is unset; the server then runs on
    /// in-memory repositories.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "127.0.0.1"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: env::var("MONGODB_URI").ok().map(|uri| DatabaseConfig {
                uri,
                database: env_or("MONGODB_DATABASE", "tribe"),
            }),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
