use crate::error::AppError;
use crate::models::{FavoriteToggle, Favorites, ItemKind, User, UserProfile};
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use crate::services::auth_service::{digest_password, generate_secret};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    WeakPassword,
    #[error("User already exists")]
    EmailTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid type. Must be 'comic' or 'character'")]
    InvalidKind,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::InvalidEmail
            | UserServiceError::WeakPassword
            | UserServiceError::InvalidKind => AppError::Validation(err.to_string()),
            UserServiceError::EmailTaken => AppError::EmailTaken,
            UserServiceError::UserNotFound => AppError::NotFound("User not found".to_string()),
            UserServiceError::Repository(RepositoryError::Database(e)) => AppError::Database(e),
            UserServiceError::Repository(RepositoryError::NotFound) => {
                AppError::NotFound("User not found".to_string())
            }
            UserServiceError::Repository(RepositoryError::AlreadyExists) => AppError::EmailTaken,
        }
    }
}

pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Validates the credentials, mints a salt and an opaque bearer token,
    /// and stores the new user. Duplicate emails fail with `EmailTaken`.
    pub async fn signup(&self, request: SignupRequest) -> Result<User, UserServiceError> {
        let email = request.email.trim().to_string();
        validate_email(&email)?;
        validate_password(&request.password)?;

        let salt = generate_secret();
        let token = generate_secret();
        let hash = digest_password(&request.password, &salt);

        match self
            .repository
            .create_user(&email, &hash, &salt, &token)
            .await
        {
            Ok(user) => Ok(user),
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::EmailTaken),
            Err(e) => Err(UserServiceError::Repository(e)),
        }
    }

    /// User by id, projected to exclude `hash`, `salt` and `token`.
    pub async fn profile(&self, id: i64) -> Result<UserProfile, UserServiceError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::UserNotFound)?;
        let favorites = self.repository.favorites(user.id).await?;

        Ok(UserProfile {
            id: user.id,
            email: user.email,
            favorites,
        })
    }

    pub async fn favorites(&self, user_id: i64) -> Result<Favorites, UserServiceError> {
        Ok(self.repository.favorites(user_id).await?)
    }

    /// Add-if-absent / remove-if-present on the user's saved-item list. The
    /// kind string is validated before any store access, so an invalid kind
    /// leaves favorites untouched.
    pub async fn toggle_favorite(
        &self,
        user_id: i64,
        kind: &str,
        item_id: &str,
    ) -> Result<FavoriteToggle, UserServiceError> {
        let kind = ItemKind::parse(kind).ok_or(UserServiceError::InvalidKind)?;
        Ok(self
            .repository
            .toggle_favorite(user_id, kind, item_id)
            .await?)
    }
}

fn validate_email(email: &str) -> Result<(), UserServiceError> {
    if !email.contains('@') || email.len() > 255 || email.is_empty() {
        return Err(UserServiceError::InvalidEmail);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), UserServiceError> {
    if password.len() < 6 {
        return Err(UserServiceError::WeakPassword);
    }
    Ok(())
}
