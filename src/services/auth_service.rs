use crate::error::AppError;
use crate::models::User;
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::InvalidCredentials => AppError::InvalidCredentials,
            AuthServiceError::InvalidToken => AppError::Unauthenticated,
            AuthServiceError::Repository(RepositoryError::Database(e)) => AppError::Database(e),
            AuthServiceError::Repository(RepositoryError::NotFound) => {
                AppError::NotFound("User not found".to_string())
            }
            AuthServiceError::Repository(RepositoryError::AlreadyExists) => AppError::EmailTaken,
        }
    }
}

/// Base64 SHA-256 digest of password concatenated with the per-user salt.
pub fn digest_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(hasher.finalize())
}

/// Random 64-char hex secret, used for both salts and bearer tokens.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Credential checks: password login and opaque-bearer-token resolution.
///
/// The token is a static capability looked up directly against the store, no
/// expiry and no cryptographic verification. Keeping the lookup behind this
/// service lets the scheme be swapped later without touching route logic.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Unknown email and wrong password are indistinguishable to the caller:
    /// both fail with the same non-specific error so accounts cannot be
    /// enumerated.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthServiceError> {
        let user = self
            .repository
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if digest_password(password, &user.salt) != user.hash {
            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn authenticate_token(&self, token: &str) -> Result<User, AuthServiceError> {
        self.repository
            .find_by_token(token)
            .await?
            .ok_or(AuthServiceError::InvalidToken)
    }
}
