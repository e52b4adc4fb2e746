//! Translation of domain and repository errors into HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use tribe_core::error::{DomainError, RepoError};
use tribe_shared::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

/// Handler-level error; every variant renders as an RFC 7807 problem
/// document with the matching status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            // The like guards answer 400 with their exact message.
            guard @ (DomainError::AlreadyLiked | DomainError::NotLiked) => {
                AppError::BadRequest(guard.to_string())
            }
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{entity_type} with id {id} not found"))
            }
            DomainError::Unauthorized => AppError::Unauthorized,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Persistence failure: {msg}");
                AppError::Internal("Database error".to_string())
            }
        }
    }
}
