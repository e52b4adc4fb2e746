//! In-memory repository implementations - used as fallback when the
//! database is not configured, and as the backing store in tests.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tribe_core::domain::{Post, Profile, User};
use tribe_core::error::RepoError;
use tribe_core::ports::{BaseRepository, PostRepository, ProfileRepository, UserRepository};

/// In-memory user repository using a HashMap with an async RwLock.
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|user| user.email == email).cloned())
    }
}

/// In-memory profile repository.
pub struct InMemoryProfileRepository {
    store: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Profile, Uuid> for InMemoryProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepoError> {
        let mut store = self.store.write().await;
        store.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .find(|profile| profile.user_id == user_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Profile>, RepoError> {
        let store = self.store.read().await;
        let mut profiles: Vec<Profile> = store.values().cloned().collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.retain(|_, profile| profile.user_id != user_id);
        Ok(())
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
