//! SQLite credential storage.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::models::Credential;
use crate::error::AppError;

/// Data access for the credential store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Inserts a credential with no token issued yet.
    async fn insert(&self, username: &str, password_digest: &str) -> Result<(), AppError>;

    async fn find(&self, username: &str) -> Result<Option<Credential>, AppError>;

    /// Overwrites the token digest and timestamp of the row matching both
    /// `username` and `password_digest`. Returns the number of rows changed.
    async fn store_token(
        &self,
        username: &str,
        password_digest: &str,
        token_digest: &str,
        issued_at: &str,
    ) -> Result<u64, AppError>;

    /// Stored token digest for a username/password pair, if the pair matches a row.
    async fn token_for(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<String>, AppError>;

    async fn token_exists(&self, token_digest: &str) -> Result<bool, AppError>;
}

pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `usuarios` table when missing.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS usuarios (
                correo TEXT PRIMARY KEY,
                password TEXT NOT NULL,
                token TEXT,
                timestamp TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_usuarios_token ON usuarios(token);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for SqliteCredentialStore {
    async fn insert(&self, username: &str, password_digest: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO usuarios (correo, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_digest)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find(&self, username: &str) -> Result<Option<Credential>, AppError> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT correo, password, token, timestamp FROM usuarios WHERE correo = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credential)
    }

    async fn store_token(
        &self,
        username: &str,
        password_digest: &str,
        token_digest: &str,
        issued_at: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE usuarios SET token = ?, timestamp = ? WHERE correo = ? AND password = ?",
        )
        .bind(token_digest)
        .bind(issued_at)
        .bind(username)
        .bind(password_digest)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn token_for(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<String>, AppError> {
        let row = sqlx::query_as::<_, (Option<String>,)>(
            "SELECT token FROM usuarios WHERE correo = ? AND password = ?",
        )
        .bind(username)
        .bind(password_digest)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(|(token,)| token))
    }

    async fn token_exists(&self, token_digest: &str) -> Result<bool, AppError> {
        let row = sqlx::query_as::<_, (String,)>("SELECT correo FROM usuarios WHERE token = ?")
            .bind(token_digest)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}
