//! MongoDB repository implementations.
//!
//! Every save is a whole-document replace: the aggregate and its embedded
//! lists are written as one unit (create or update via upsert). There is no
//! optimistic concurrency check; concurrent writers to the same aggregate
//! are last-writer-wins.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use uuid::Uuid;

use tribe_core::domain::{Post, Profile, User};
use tribe_core::error::RepoError;
use tribe_core::ports::{BaseRepository, PostRepository, ProfileRepository, UserRepository};

use super::document::{PostDocument, ProfileDocument, UserDocument};

const USERS: &str = "users";
const PROFILES: &str = "profiles";
const POSTS: &str = "posts";

fn query_err(e: mongodb::error::Error) -> RepoError {
    RepoError::Query(e.to_string())
}

/// MongoDB user repository.
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS),
        }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for MongoUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        document.map(User::try_from).transpose()
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let document = UserDocument::from(user.clone());
        self.collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(query_err)?;

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(query_err)?;

        document.map(User::try_from).transpose()
    }
}

/// MongoDB profile repository.
pub struct MongoProfileRepository {
    collection: Collection<ProfileDocument>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PROFILES),
        }
    }
}

#[async_trait]
impl BaseRepository<Profile, Uuid> for MongoProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        document.map(Profile::try_from).transpose()
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepoError> {
        let document = ProfileDocument::from(profile.clone());
        self.collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(query_err)?;

        Ok(profile)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "user_id": user_id.to_string() })
            .await
            .map_err(query_err)?;

        document.map(Profile::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Profile>, RepoError> {
        let documents: Vec<ProfileDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(query_err)?
            .try_collect()
            .await
            .map_err(query_err)?;

        documents.into_iter().map(Profile::try_from).collect()
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), RepoError> {
        self.collection
            .delete_one(doc! { "user_id": user_id.to_string() })
            .await
            .map_err(query_err)?;

        Ok(())
    }
}

/// MongoDB post repository.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(POSTS),
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for MongoPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        document.map(Post::try_from).transpose()
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let document = PostDocument::from(post.clone());
        self.collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(query_err)?;

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let documents: Vec<PostDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(query_err)?
            .try_collect()
            .await
            .map_err(query_err)?;

        documents.into_iter().map(Post::try_from).collect()
    }
}
