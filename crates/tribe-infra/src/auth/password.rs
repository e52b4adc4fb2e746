//! Password hashing backed by Argon2id.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use tribe_core::ports::{AuthError, PasswordService};

/// Argon2 password service using the library's default parameters
/// (Argon2id, per-password random salt, PHC string output).
#[derive(Default)]
pub struct Argon2PasswordService;

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_phc_string() {
        let service = Argon2PasswordService::new();
        let hash = service.hash("hunter2hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_accepts_correct_and_rejects_wrong_password() {
        let service = Argon2PasswordService::new();
        let hash = service.hash("correct horse battery staple").unwrap();

        assert!(service.verify("correct horse battery staple", &hash).unwrap());
        assert!(!service.verify("incorrect horse", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let service = Argon2PasswordService::new();
        let result = service.verify("anything", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Random salt per hash.
        let service = Argon2PasswordService::new();
        let a = service.hash("same password").unwrap();
        let b = service.hash("same password").unwrap();
        assert_ne!(a, b);
    }
}
