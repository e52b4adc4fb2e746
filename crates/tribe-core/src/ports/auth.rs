//! Authentication ports: token issuing/validation and password hashing.

use uuid::Uuid;

/// Identity carried by a validated access token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
}

/// Issues and validates bearer tokens.
pub trait TokenService: Send + Sync {
    fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of freshly issued tokens, in seconds. Exposed so the login
    /// response can tell clients when to refresh.
    fn expiration_seconds(&self) -> i64;
}

/// Hashes and verifies passwords.
pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
