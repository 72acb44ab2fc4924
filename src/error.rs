use thiserror::Error;
use actix_web::{ResponseError, HttpResponse, http::StatusCode};
use serde_json::json;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    AuthError(#[from] AuthError),

    #[error(transparent)]
    ContactError(#[from] ContactError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(DatabaseError::QueryError(err.to_string()))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl AppError {
    /// Message sent to the client. Storage and internal failures are logged
    /// here and replaced by a generic message.
    fn detail(&self) -> String {
        match self {
            AppError::AuthError(_) | AppError::ContactError(_) => self.to_string(),
            _ => {
                tracing::error!("Request failed: {}", self);
                "Internal server error".to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.detail()
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthError(e) => match e {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::UserExists => StatusCode::BAD_REQUEST,
            },
            AppError::ContactError(e) => match e {
                ContactError::AlreadyExists => StatusCode::BAD_REQUEST,
                ContactError::NotFound => StatusCode::NOT_FOUND,
                ContactError::Missing => StatusCode::BAD_REQUEST,
            },
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No autorizado")]
    InvalidCredentials,

    #[error("Token Inexistente")]
    InvalidToken,

    #[error("Usuario ya existe")]
    UserExists,
}

/// Failures of the contact endpoints. Lookups by key report `NotFound`,
/// while update and delete of an absent email report `Missing` (400).
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contacto ya existe")]
    AlreadyExists,

    #[error("Contacto no encontrado")]
    NotFound,

    #[error("Contacto no existe")]
    Missing,
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}
