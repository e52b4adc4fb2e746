//! HTTP-level tests driving the real route table over in-memory repositories.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use tribe_core::ports::{PasswordService, TokenService};
use tribe_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use crate::handlers;
use crate::state::AppState;

macro_rules! test_app {
    () => {{
        let state = AppState::new(None).await;
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "api-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "api-test".to_string(),
        }));
        let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(token_service))
                .app_data(web::Data::new(password_service))
                .configure(handlers::configure_routes),
        )
        .await
    }};
}

/// Register an account and return its bearer token.
macro_rules! register {
    ($app:expr, $name:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "name": $name,
                "email": $email,
                "password": "a strong password",
            }))
            .to_request();
        let res = test::call_service(&$app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}

macro_rules! authed {
    ($method:ident, $uri:expr, $token:expr) => {
        test::TestRequest::$method()
            .uri($uri)
            .insert_header(("Authorization", format!("Bearer {}", $token)))
    };
}

#[actix_rt::test]
async fn test_health_is_public() {
    let app = test_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
async fn test_register_rejects_short_password() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Jo",
            "email": "jo@example.com",
            "password": "short",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_register_conflicts_on_duplicate_email() {
    let app = test_app!();
    register!(app, "Jo", "jo@example.com");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Other Jo",
            "email": "jo@example.com",
            "password": "a strong password",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[actix_rt::test]
async fn test_login_and_me_round_trip() {
    let app = test_app!();
    register!(app, "Jo", "jo@example.com");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "jo@example.com", "password": "a strong password" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let token = body["access_token"].as_str().unwrap();

    let res = test::call_service(&app, authed!(get, "/api/auth/me", token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = test::read_body_json(res).await;
    assert_eq!(me["email"], "jo@example.com");
    assert_eq!(me["name"], "Jo");
}

#[actix_rt::test]
async fn test_wrong_password_is_unauthorized() {
    let app = test_app!();
    register!(app, "Jo", "jo@example.com");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "jo@example.com", "password": "not the password" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_posts_require_authentication() {
    let app = test_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_profile_create_names_missing_field() {
    let app = test_app!();
    let token = register!(app, "Jo", "jo@example.com");

    let req = authed!(post, "/api/profiles", token)
        .set_json(json!({ "status": "Developer", "location": "NYC", "skills": "Rust" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["detail"], "Company is required");
}

#[actix_rt::test]
async fn test_profile_upsert_merges_only_provided_fields() {
    let app = test_app!();
    let token = register!(app, "Jo", "jo@example.com");

    let req = authed!(post, "/api/profiles", token)
        .set_json(json!({
            "company": "Acme",
            "status": "Developer",
            "location": "NYC",
            "skills": "Rust, SQL",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = authed!(post, "/api/profiles", token)
        .set_json(json!({ "bio": "Hello" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let profile: Value = test::read_body_json(res).await;

    assert_eq!(profile["bio"], "Hello");
    assert_eq!(profile["company"], "Acme");
    assert_eq!(profile["status"], "Developer");
    assert_eq!(profile["location"], "NYC");
    assert_eq!(profile["skills"], json!(["Rust", "SQL"]));
}

#[actix_rt::test]
async fn test_experience_add_and_remove() {
    let app = test_app!();
    let token = register!(app, "Jo", "jo@example.com");

    let req = authed!(post, "/api/profiles", token)
        .set_json(json!({
            "company": "Acme",
            "status": "Developer",
            "location": "NYC",
            "skills": "Rust",
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = authed!(put, "/api/profiles/experience", token)
        .set_json(json!({
            "title": "Eng",
            "company": "Acme",
            "location": "NYC",
            "from": "2020-01-01",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let profile: Value = test::read_body_json(res).await;
    assert_eq!(profile["experience"].as_array().unwrap().len(), 1);
    let exp_id = profile["experience"][0]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/profiles/experience/{exp_id}");
    let res = test::call_service(&app, authed!(delete, &uri, token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let profile: Value = test::read_body_json(res).await;
    assert!(profile["experience"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_post_like_and_comment_flow() {
    let app = test_app!();
    let author_token = register!(app, "Alice", "alice@example.com");
    let reader_token = register!(app, "Bob", "bob@example.com");

    let req = authed!(post, "/api/posts", author_token)
        .set_json(json!({ "text": "First post" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let post: Value = test::read_body_json(res).await;
    let post_id = post["id"].as_str().unwrap().to_string();
    assert_eq!(post["author_name"], "Alice");

    // Like, then like again.
    let uri = format!("/api/posts/{post_id}/like");
    let res = test::call_service(&app, authed!(put, &uri, reader_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let likes: Value = test::read_body_json(res).await;
    assert_eq!(likes.as_array().unwrap().len(), 1);

    let res = test::call_service(&app, authed!(put, &uri, reader_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["detail"], "Post already liked");

    // Comment as Bob; Alice may not remove it.
    let uri = format!("/api/posts/{post_id}/comments");
    let req = authed!(post, &uri, reader_token)
        .set_json(json!({ "text": "Nice one" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let comments: Value = test::read_body_json(res).await;
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["name"], "Bob");
    let comment_id = comments[0]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/posts/{post_id}/comments/{comment_id}");
    let res = test::call_service(&app, authed!(delete, &uri, author_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(&app, authed!(delete, &uri, reader_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let comments: Value = test::read_body_json(res).await;
    assert!(comments.as_array().unwrap().is_empty());

    // Unlike returns the likes list to empty.
    let uri = format!("/api/posts/{post_id}/unlike");
    let res = test::call_service(&app, authed!(put, &uri, reader_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let likes: Value = test::read_body_json(res).await;
    assert!(likes.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_only_the_author_deletes_a_post() {
    let app = test_app!();
    let author_token = register!(app, "Alice", "alice@example.com");
    let other_token = register!(app, "Bob", "bob@example.com");

    let req = authed!(post, "/api/posts", author_token)
        .set_json(json!({ "text": "Mine" }))
        .to_request();
    let post: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let res = test::call_service(&app, authed!(delete, &uri, other_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(&app, authed!(delete, &uri, author_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(&app, authed!(get, &uri, author_token).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_malformed_post_id_reads_as_not_found() {
    let app = test_app!();
    let token = register!(app, "Jo", "jo@example.com");

    let res = test::call_service(
        &app,
        authed!(get, "/api/posts/not-a-uuid", token).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_account_deletion_cascades_to_user() {
    let app = test_app!();
    let token = register!(app, "Jo", "jo@example.com");

    let req = authed!(post, "/api/profiles", token)
        .set_json(json!({
            "company": "Acme",
            "status": "Developer",
            "location": "NYC",
            "skills": "Rust",
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::OK
    );

    let res = test::call_service(&app, authed!(delete, "/api/profiles", token).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    // The owning user account is gone with the profile.
    let res = test::call_service(&app, authed!(get, "/api/auth/me", token).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
