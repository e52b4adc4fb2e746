//! Bearer-token authentication extractor.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};

use tribe_core::ports::{AuthError, TokenService};
use tribe_shared::ErrorResponse;

/// The acting user, resolved from the request's bearer token.
///
/// Handlers take an `Identity` parameter to require authentication; routes
/// without one are public.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub email: String,
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identify(req).map_err(AuthenticationError))
    }
}

fn identify(req: &HttpRequest) -> Result<Identity, AuthError> {
    let token_service = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService not registered in app data");
            AuthError::InvalidToken("Server configuration error".to_string())
        })?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

    let claims = token_service.validate_token(token)?;
    Ok(Identity {
        user_id: claims.user_id,
        email: claims.email,
    })
}

/// Wraps [`AuthError`] so the extractor can answer with a problem document.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self.0 {
            AuthError::HashingError(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Provide a Bearer token in the Authorization header"),
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("The token has expired; login again"),
            AuthError::InvalidToken(detail) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(detail.clone())
            }
            AuthError::HashingError(_) => ErrorResponse::internal_error(),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
