//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use tribe_core::domain::{AuthorSnapshot, Post, authorize};
use tribe_shared::dto::{AddCommentRequest, CreatePostRequest, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::parse_path_id;

/// POST /api/posts - Protected route
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let author = author_snapshot(&state, &identity).await?;

    let post = Post::new(author, body.into_inner().text)?;
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(saved))
}

/// GET /api/posts - Protected route
///
/// Most recent posts first.
pub async fn list_posts(
    _identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id} - Protected route
pub async fn get_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_path_id(&path, "Post")?;
    let post = load_post(&state, post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id} - Protected route
///
/// Only the post's author may delete it.
pub async fn delete_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_path_id(&path, "Post")?;
    let post = load_post(&state, post_id).await?;

    authorize(identity.user_id, post.user_id)?;
    state.posts.delete(post.id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post removed")))
}

/// PUT /api/posts/{id}/like - Protected route
pub async fn like_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_path_id(&path, "Post")?;
    let mut post = load_post(&state, post_id).await?;

    post.like(identity.user_id)?;
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(saved.likes))
}

/// PUT /api/posts/{id}/unlike - Protected route
pub async fn unlike_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_path_id(&path, "Post")?;
    let mut post = load_post(&state, post_id).await?;

    post.unlike(identity.user_id)?;
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(saved.likes))
}

/// POST /api/posts/{id}/comments - Protected route
pub async fn add_comment(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = parse_path_id(&path, "Post")?;
    let author = author_snapshot(&state, &identity).await?;
    let mut post = load_post(&state, post_id).await?;

    post.add_comment(author, body.into_inner().text)?;
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(saved.comments))
}

/// DELETE /api/posts/{id}/comments/{comment_id} - Protected route
///
/// Only the comment's author may delete it.
pub async fn remove_comment(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_path_id(&post_id, "Post")?;
    let comment_id = parse_path_id(&comment_id, "Comment")?;
    let mut post = load_post(&state, post_id).await?;

    post.remove_comment(comment_id, identity.user_id)?;
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(saved.comments))
}

async fn load_post(state: &AppState, post_id: Uuid) -> Result<Post, AppError> {
    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}

/// Snapshot of the acting user's name and avatar, denormalized into posts
/// and comments at creation time.
async fn author_snapshot(
    state: &AppState,
    identity: &Identity,
) -> Result<AuthorSnapshot, AppError> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(AuthorSnapshot {
        user_id: user.id,
        name: user.name,
        avatar: user.avatar,
    })
}
