//! Error types for the domain layer and its persistence port.

use thiserror::Error;
use uuid::Uuid;

/// Failures raised by aggregate mutation rules.
///
/// Every mutation validates before touching any embedded list, so a returned
/// error always means the aggregate is unchanged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,
}

/// Failures raised by repository implementations. The cause is opaque to the
/// domain; callers translate these into a 500 at the edge.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
