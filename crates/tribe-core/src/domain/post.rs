use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::guard::authorize;
use crate::error::DomainError;

/// Post aggregate - a text body plus embedded like and comment lists,
/// mutated and persisted as a whole. Both lists are ordered newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// A like record embedded in a post. At most one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// A comment embedded in a post, carrying a snapshot of its author's
/// name and avatar taken at insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// Author identity captured when a post or comment is created.
/// Later changes to the author's account do not propagate back.
#[derive(Debug, Clone)]
pub struct AuthorSnapshot {
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
}

impl Post {
    /// Create a new post. Starts with empty like and comment lists.
    pub fn new(author: AuthorSnapshot, text: String) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation("Text is required".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: author.user_id,
            text,
            author_name: author.name,
            author_avatar: author.avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Record a like by the given user at the head of the list.
    pub fn like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        if self.likes.iter().any(|like| like.user_id == user_id) {
            return Err(DomainError::AlreadyLiked);
        }
        self.likes.insert(
            0,
            Like {
                id: Uuid::new_v4(),
                user_id,
            },
        );
        Ok(())
    }

    /// Remove the given user's like, located by user id rather than position.
    pub fn unlike(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user_id == user_id)
            .ok_or(DomainError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    /// Validate and insert a comment at the head of the list.
    /// Returns the freshly assigned comment id.
    pub fn add_comment(
        &mut self,
        author: AuthorSnapshot,
        text: String,
    ) -> Result<Uuid, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation("Text is required".to_string()));
        }
        let comment = Comment {
            id: Uuid::new_v4(),
            user_id: author.user_id,
            text,
            name: author.name,
            avatar: author.avatar,
            created_at: Utc::now(),
        };
        let id = comment.id;
        self.comments.insert(0, comment);
        Ok(id)
    }

    /// Remove the comment with the given id. Only the comment's author may
    /// remove it; the comment is located by id equality, never by position.
    pub fn remove_comment(
        &mut self,
        comment_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<(), DomainError> {
        let comment = self
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .ok_or(DomainError::NotFound {
                entity_type: "comment",
                id: comment_id,
            })?;
        authorize(acting_user_id, comment.user_id)?;
        self.comments.retain(|comment| comment.id != comment_id);
        Ok(())
    }
}
