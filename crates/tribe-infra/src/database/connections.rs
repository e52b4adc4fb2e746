//! Database connection management.

#[cfg(feature = "mongo")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

/// Shared handle to the document database.
///
/// MongoDB's `Database` is internally pooled, so a single handle is cloned
/// into every repository.
#[cfg(feature = "mongo")]
#[derive(Clone)]
pub struct DatabaseConnections {
    pub db: Database,
}

#[cfg(feature = "mongo")]
impl DatabaseConnections {
    /// Initialize the database connection from configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("tribe-api".to_string());

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        // Fail fast when the server is unreachable instead of on first query.
        db.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = %config.database, "Database connected");

        Ok(Self { db })
    }
}
