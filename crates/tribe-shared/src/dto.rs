//! Data Transfer Objects - request/response types for the API.
//!
//! Required string fields default to empty on deserialization so that a
//! missing field reaches domain validation (and a precise error message)
//! instead of failing JSON decoding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: String,
}

/// Request to create or update the acting user's profile.
/// `skills` is one comma-delimited string, split server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

/// Request to add an experience entry to the acting user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Request to add an education entry to the acting user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRequest {
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub fieldofstudy: String,
    #[serde(default)]
    pub location: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub text: String,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub text: String,
}

/// Plain confirmation message, e.g. after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
