//! User document for the `users` collection.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::domain::User;
use tribe_core::error::RepoError;

use super::parse_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = RepoError;

    fn try_from(doc: UserDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            name: doc.name,
            email: doc.email,
            password_hash: doc.password_hash,
            avatar: doc.avatar,
            created_at: doc.created_at,
        })
    }
}
