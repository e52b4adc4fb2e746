//! Application state - shared across all handlers.

use std::sync::Arc;

use tribe_core::ports::{PostRepository, ProfileRepository, UserRepository};
use tribe_infra::database::DatabaseConfig;
use tribe_infra::database::memory::{
    InMemoryPostRepository, InMemoryProfileRepository, InMemoryUserRepository,
};

#[cfg(feature = "mongo")]
use tribe_infra::database::{
    DatabaseConnections, MongoPostRepository, MongoProfileRepository, MongoUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "mongo")]
        if let Some(config) = db_config {
            match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let state = Self {
                        users: Arc::new(MongoUserRepository::new(&connections.db)),
                        profiles: Arc::new(MongoProfileRepository::new(&connections.db)),
                        posts: Arc::new(MongoPostRepository::new(&connections.db)),
                    };
                    tracing::info!("Application state initialized");
                    return state;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "mongo"))]
        {
            let _ = db_config;
            tracing::info!("Running without mongo feature - using in-memory repositories");
        }

        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }
}
