//! Account registration, login, and current-user lookup.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use tribe_core::domain::User;
use tribe_core::ports::{PasswordService, TokenService};
use tribe_shared::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = state
        .users
        .save(User::new(req.name, req.email, password_hash, req.avatar))
        .await?;

    let tokens = issue_token(&token_service, &user)?;
    Ok(HttpResponse::Created().json(tokens))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // A missing account and a wrong password answer identically.
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let tokens = issue_token(&token_service, &user)?;
    Ok(HttpResponse::Ok().json(tokens))
}

/// GET /api/auth/me
pub async fn me(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        avatar: user.avatar,
        created_at: user.created_at.to_rfc3339(),
    }))
}

fn issue_token(service: &Arc<dyn TokenService>, user: &User) -> Result<AuthResponse, AppError> {
    let access_token = service
        .generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: service.expiration_seconds() as u64,
    })
}
