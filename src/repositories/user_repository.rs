use crate::models::{FavoriteToggle, Favorites, ItemKind, ToggleAction, User};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("User not found")]
    NotFound,
    #[error("User already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        email: &str,
        hash: &str,
        salt: &str,
        token: &str,
    ) -> RepositoryResult<User>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>>;
    async fn favorites(&self, user_id: i64) -> RepositoryResult<Favorites>;
    async fn toggle_favorite(
        &self,
        user_id: i64,
        kind: ItemKind,
        item_id: &str,
    ) -> RepositoryResult<FavoriteToggle>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, email, hash, salt, token, created_at";

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(
        &self,
        email: &str,
        hash: &str,
        salt: &str,
        token: &str,
    ) -> RepositoryResult<User> {
        let result = sqlx::query("INSERT INTO users (email, hash, salt, token) VALUES (?, ?, ?, ?)")
            .bind(email)
            .bind(hash)
            .bind(salt)
            .bind(token)
            .execute(&self.pool)
            .await;

        match result {
            Ok(res) => {
                let id = res.last_insert_rowid();
                self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
            }
            Err(e) => {
                if e.to_string().contains("UNIQUE") {
                    Err(RepositoryError::AlreadyExists)
                } else {
                    Err(RepositoryError::Database(e))
                }
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE token = ?"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn favorites(&self, user_id: i64) -> RepositoryResult<Favorites> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT kind, item_id FROM favorites WHERE user_id = ? ORDER BY id")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(Favorites::from_rows(rows))
    }

    /// Atomic membership toggle. The delete-or-insert and the re-read of the
    /// updated lists run in one transaction, so two concurrent toggles on the
    /// same user cannot lose an update the way an application-level
    /// read-modify-write would.
    async fn toggle_favorite(
        &self,
        user_id: i64,
        kind: ItemKind,
        item_id: &str,
    ) -> RepositoryResult<FavoriteToggle> {
        let mut tx = self.pool.begin().await?;

        // Remove the first occurrence if present; duplicates beyond the first
        // survive, matching the toggle-off semantics of a list splice.
        let removed = sqlx::query(
            "DELETE FROM favorites WHERE id = (
                 SELECT id FROM favorites
                 WHERE user_id = ? AND kind = ? AND item_id = ?
                 ORDER BY id LIMIT 1
             )",
        )
        .bind(user_id)
        .bind(kind.singular())
        .bind(item_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let action = if removed > 0 {
            ToggleAction::Removed
        } else {
            sqlx::query("INSERT INTO favorites (user_id, kind, item_id) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(kind.singular())
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
            ToggleAction::Added
        };

        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT kind, item_id FROM favorites WHERE user_id = ? ORDER BY id")
                .bind(user_id)
                .fetch_all(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(FavoriteToggle {
            action,
            favorites: Favorites::from_rows(rows),
        })
    }
}
