//! SQLite contact storage.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::models::Contact;
use crate::error::{AppError, ContactError};

/// Data access for the contact store, keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn exists(&self, email: &str) -> Result<bool, AppError>;

    /// Fails with [`ContactError::AlreadyExists`] on a duplicate email.
    async fn create(&self, contact: &Contact) -> Result<(), AppError>;

    async fn list(&self) -> Result<Vec<Contact>, AppError>;

    async fn get(&self, email: &str) -> Result<Option<Contact>, AppError>;

    /// Overwrites name and phone of the row keyed by `email`.
    async fn update(&self, email: &str, name: &str, phone: &str) -> Result<u64, AppError>;

    async fn delete(&self, email: &str) -> Result<u64, AppError>;
}

pub struct SqliteContactStore {
    pool: SqlitePool,
}

impl SqliteContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `contactos` table when missing.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contactos (
                email TEXT PRIMARY KEY,
                nombre TEXT NOT NULL,
                telefono TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ContactRepository for SqliteContactStore {
    async fn exists(&self, email: &str) -> Result<bool, AppError> {
        let row = sqlx::query_as::<_, (String,)>("SELECT email FROM contactos WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn create(&self, contact: &Contact) -> Result<(), AppError> {
        let result = sqlx::query("INSERT INTO contactos (email, nombre, telefono) VALUES (?, ?, ?)")
            .bind(&contact.email)
            .bind(&contact.name)
            .bind(&contact.phone)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(ContactError::AlreadyExists.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>("SELECT email, nombre, telefono FROM contactos")
            .fetch_all(&self.pool)
            .await?;

        Ok(contacts)
    }

    async fn get(&self, email: &str) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT email, nombre, telefono FROM contactos WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn update(&self, email: &str, name: &str, phone: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE contactos SET nombre = ?, telefono = ? WHERE email = ?")
            .bind(name)
            .bind(phone)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, email: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM contactos WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
