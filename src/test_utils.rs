pub mod test_helpers {
    use crate::config::AppConfig;
    use crate::models::User;
    use crate::repositories::SqliteUserRepository;
    use crate::services::auth_service::{digest_password, generate_secret};
    use crate::services::{AuthService, CatalogClient, UserService};
    use crate::AppState;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use std::sync::Arc;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Insert a test user with a digested password and fresh secrets
    pub async fn insert_test_user(
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<User, sqlx::Error> {
        let salt = generate_secret();
        let token = generate_secret();
        let hash = digest_password(password, &salt);

        let result = sqlx::query("INSERT INTO users (email, hash, salt, token) VALUES (?, ?, ?, ?)")
            .bind(email)
            .bind(&hash)
            .bind(&salt)
            .bind(&token)
            .execute(pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            email: email.to_string(),
            hash,
            salt,
            token,
            created_at: None,
        })
    }

    /// Configuration pointing the catalog client at `base_url`, with the rest
    /// of the fields set to harmless test values.
    pub fn catalog_config(base_url: &str) -> AppConfig {
        AppConfig {
            database_url: ":memory:".to_string(),
            catalog_base_url: base_url.to_string(),
            catalog_api_key: "test-key".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    /// Wire up real services over `pool` and the given catalog client.
    pub fn test_state(pool: SqlitePool, catalog: Arc<dyn CatalogClient>) -> AppState {
        let user_repository = Arc::new(SqliteUserRepository::new(pool));
        AppState {
            user_service: Arc::new(UserService::new(user_repository.clone())),
            auth_service: Arc::new(AuthService::new(user_repository)),
            catalog,
        }
    }
}
