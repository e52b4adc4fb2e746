use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account - owns at most one profile and any number of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    ///
    /// When no avatar is supplied, a deterministic placeholder is derived
    /// from the email address.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        avatar: Option<String>,
    ) -> Self {
        let avatar = avatar.unwrap_or_else(|| default_avatar(&email));
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar,
            created_at: Utc::now(),
        }
    }
}

fn default_avatar(email: &str) -> String {
    let seed: String = email
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("https://api.dicebear.com/9.x/identicon/svg?seed={seed}")
}
