//! Document-store persistence.

mod connections;
pub mod memory;

#[cfg(feature = "mongo")]
pub mod document;
#[cfg(feature = "mongo")]
pub mod mongo_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "mongo")]
pub use connections::DatabaseConnections;

#[cfg(feature = "mongo")]
pub use mongo_repo::{MongoPostRepository, MongoProfileRepository, MongoUserRepository};
