//! BSON document models and their conversions to and from domain aggregates.
//!
//! Aggregates are stored as whole documents: embedded lists travel with their
//! owning document on every save, never as partial sub-document updates.

mod post;
mod profile;
mod user;

pub use post::PostDocument;
pub use profile::ProfileDocument;
pub use user::UserDocument;

use tribe_core::error::RepoError;
use uuid::Uuid;

/// Parse a stored document id back into a UUID.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::Query(format!("malformed document id: {e}")))
}
