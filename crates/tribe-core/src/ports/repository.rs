use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Profile, User};
use crate::error::RepoError;

/// Generic repository trait defining whole-aggregate CRUD operations.
///
/// `save` always writes the aggregate as one unit; embedded lists are never
/// persisted through partial sub-document updates.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an aggregate by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an aggregate (create or full replace).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an aggregate by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Profile repository. Profiles are keyed by their own id but almost always
/// looked up through their owning user.
#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, Uuid> {
    /// Find the profile owned by the given user.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError>;

    /// All profiles.
    async fn list(&self) -> Result<Vec<Profile>, RepoError>;

    /// Delete the profile owned by the given user, if any.
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, most recent first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;
}
