use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact as stored in `contactos` and exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub email: String,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    #[sqlx(rename = "telefono")]
    pub phone: String,
}

impl Contact {
    pub fn new(email: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// A row of `usuarios`. Only digests are ever stored.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    #[sqlx(rename = "correo")]
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_digest: String,
    #[sqlx(rename = "token")]
    pub token_digest: Option<String>,
    #[sqlx(rename = "timestamp")]
    pub issued_at: Option<String>,
}
