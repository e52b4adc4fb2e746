//! Profile handlers.

use actix_web::{HttpResponse, web};

use tribe_core::domain::{
    EducationInput, ExperienceInput, Profile, ProfileUpdate, parse_skills,
};
use tribe_shared::dto::{
    EducationRequest, ExperienceRequest, MessageResponse, UpsertProfileRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::parse_path_id;

/// GET /api/profiles/me - Protected route
pub async fn my_profile(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .find_by_user_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("There is no profile for this user".to_string()))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/profiles - Protected route
///
/// Creates the acting user's profile, or merges the provided fields into the
/// existing one.
pub async fn upsert_profile(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<UpsertProfileRequest>,
) -> AppResult<HttpResponse> {
    let update = to_update(body.into_inner());

    let profile = match state.profiles.find_by_user_id(identity.user_id).await? {
        Some(mut profile) => {
            profile.apply(update);
            profile
        }
        None => Profile::create(identity.user_id, update)?,
    };

    let saved = state.profiles.save(profile).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// GET /api/profiles - Public route
pub async fn list_profiles(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profiles = state.profiles.list().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

/// GET /api/profiles/user/{user_id} - Public route
pub async fn profile_by_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_path_id(&path, "Profile")?;

    let profile = state
        .profiles
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profiles - Protected route
///
/// Deletes the acting user's profile and, cascading, the user account itself.
pub async fn delete_account(
    identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    state.profiles.delete_by_user_id(identity.user_id).await?;
    state.users.delete(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User removed")))
}

/// PUT /api/profiles/experience - Protected route
pub async fn add_experience(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<ExperienceRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut profile = load_own_profile(&state, &identity).await?;

    profile.add_experience(ExperienceInput {
        title: req.title,
        company: req.company,
        location: req.location,
        from: req.from,
        to: req.to,
        current: req.current,
        description: req.description,
    })?;

    let saved = state.profiles.save(profile).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/profiles/experience/{exp_id} - Protected route
pub async fn remove_experience(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let exp_id = parse_path_id(&path, "Experience")?;
    let mut profile = load_own_profile(&state, &identity).await?;

    profile.remove_experience(exp_id)?;

    let saved = state.profiles.save(profile).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/profiles/education - Protected route
pub async fn add_education(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<EducationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut profile = load_own_profile(&state, &identity).await?;

    profile.add_education(EducationInput {
        university: req.university,
        degree: req.degree,
        fieldofstudy: req.fieldofstudy,
        location: req.location,
        from: req.from,
        to: req.to,
        description: req.description,
    })?;

    let saved = state.profiles.save(profile).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/profiles/education/{edu_id} - Protected route
pub async fn remove_education(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let edu_id = parse_path_id(&path, "Education")?;
    let mut profile = load_own_profile(&state, &identity).await?;

    profile.remove_education(edu_id)?;

    let saved = state.profiles.save(profile).await?;
    Ok(HttpResponse::Ok().json(saved))
}

async fn load_own_profile(state: &AppState, identity: &Identity) -> Result<Profile, AppError> {
    state
        .profiles
        .find_by_user_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("There is no profile for this user".to_string()))
}

fn to_update(req: UpsertProfileRequest) -> ProfileUpdate {
    ProfileUpdate {
        company: req.company,
        status: req.status,
        location: req.location,
        // An empty skills string is treated as "not provided".
        skills: req
            .skills
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(parse_skills),
        bio: req.bio,
        linkedin: req.linkedin,
        youtube: req.youtube,
    }
}
