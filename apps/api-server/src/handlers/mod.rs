//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod profiles;

use actix_web::web;
use uuid::Uuid;

use crate::middleware::error::AppError;

/// Parse a path segment as an aggregate id; a malformed id reads the same
/// as a missing aggregate.
pub(crate) fn parse_path_id(raw: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{resource} not found")))
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Profile routes
            .service(
                web::scope("/profiles")
                    .route("/me", web::get().to(profiles::my_profile))
                    .route("/user/{user_id}", web::get().to(profiles::profile_by_user))
                    .route("/experience", web::put().to(profiles::add_experience))
                    .route(
                        "/experience/{exp_id}",
                        web::delete().to(profiles::remove_experience),
                    )
                    .route("/education", web::put().to(profiles::add_education))
                    .route(
                        "/education/{edu_id}",
                        web::delete().to(profiles::remove_education),
                    )
                    .route("", web::post().to(profiles::upsert_profile))
                    .route("", web::get().to(profiles::list_profiles))
                    .route("", web::delete().to(profiles::delete_account)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("/{id}/like", web::put().to(posts::like_post))
                    .route("/{id}/unlike", web::put().to(posts::unlike_post))
                    .route("/{id}/comments", web::post().to(posts::add_comment))
                    .route(
                        "/{id}/comments/{comment_id}",
                        web::delete().to(posts::remove_comment),
                    )
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("", web::post().to(posts::create_post))
                    .route("", web::get().to(posts::list_posts)),
            ),
    );
}
