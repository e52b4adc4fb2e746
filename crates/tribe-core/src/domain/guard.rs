//! Ownership check applied before mutating operations.

use uuid::Uuid;

use crate::error::DomainError;

/// Succeeds iff the acting user owns the resource.
///
/// Callers must invoke this before applying any part of a mutation; an
/// `Unauthorized` result aborts the whole operation with no side effect.
pub fn authorize(acting_user_id: Uuid, resource_owner_id: Uuid) -> Result<(), DomainError> {
    if acting_user_id == resource_owner_id {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}
