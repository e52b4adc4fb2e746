//! # Tribe Infrastructure
//!
//! Concrete implementations of the ports defined in `tribe-core`.
//! This crate contains the document-store repositories, their in-memory
//! fallbacks, and the authentication services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongo` - MongoDB document store support
//! - `auth` - JWT + Argon2 authentication

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::memory::{
    InMemoryPostRepository, InMemoryProfileRepository, InMemoryUserRepository,
};

pub use database::DatabaseConfig;

#[cfg(feature = "mongo")]
pub use database::{
    DatabaseConnections, MongoPostRepository, MongoProfileRepository, MongoUserRepository,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtTokenService};
