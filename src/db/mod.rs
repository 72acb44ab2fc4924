//! Database module for the contact service
//!
//! Connection setup plus the repositories for the credential store
//! and the contact store. Each store lives in its own SQLite database.

pub mod contacts;
pub mod credentials;
pub mod models;

pub use contacts::{ContactRepository, SqliteContactStore};
pub use credentials::{CredentialRepository, SqliteCredentialStore};
pub use models::{Contact, Credential};

#[cfg(test)]
pub use contacts::MockContactRepository;
#[cfg(test)]
pub use credentials::MockCredentialRepository;

use crate::error::{AppError, DatabaseError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Opens a pool for `url`, creating the database file when missing.
///
/// Connections never expire so a `sqlite::memory:` database survives
/// for the lifetime of the pool.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .map_err(|e| AppError::DatabaseError(DatabaseError::ConnectionError(e.to_string())))
}
