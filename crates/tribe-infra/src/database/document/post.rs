//! Post document for the `posts` collection.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::domain::{Comment, Like, Post};
use tribe_core::error::RepoError;

use super::parse_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub likes: Vec<LikeDocument>,
    pub comments: Vec<CommentDocument>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeDocument {
    pub id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDocument {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            text: post.text,
            author_name: post.author_name,
            author_avatar: post.author_avatar,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
        }
    }
}

impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(doc: PostDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            user_id: parse_id(&doc.user_id)?,
            text: doc.text,
            author_name: doc.author_name,
            author_avatar: doc.author_avatar,
            likes: doc
                .likes
                .into_iter()
                .map(Like::try_from)
                .collect::<Result<_, _>>()?,
            comments: doc
                .comments
                .into_iter()
                .map(Comment::try_from)
                .collect::<Result<_, _>>()?,
            created_at: doc.created_at,
        })
    }
}

impl From<Like> for LikeDocument {
    fn from(like: Like) -> Self {
        Self {
            id: like.id.to_string(),
            user_id: like.user_id.to_string(),
        }
    }
}

impl TryFrom<LikeDocument> for Like {
    type Error = RepoError;

    fn try_from(doc: LikeDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            user_id: parse_id(&doc.user_id)?,
        })
    }
}

impl From<Comment> for CommentDocument {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user_id: comment.user_id.to_string(),
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            created_at: comment.created_at,
        }
    }
}

impl TryFrom<CommentDocument> for Comment {
    type Error = RepoError;

    fn try_from(doc: CommentDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            user_id: parse_id(&doc.user_id)?,
            text: doc.text,
            name: doc.name,
            avatar: doc.avatar,
            created_at: doc.created_at,
        })
    }
}
