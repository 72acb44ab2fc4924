use actix_web::{web, HttpResponse};
use actix_web_httpauth::extractors::basic::BasicAuth;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

/// `GET /token`: exchanges Basic credentials for a fresh bearer token.
pub async fn issue_token(
    credentials: BasicAuth,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let username = credentials.user_id();
    let password = credentials.password().unwrap_or_default();
    info!("Received token request for {}", username);

    let token = state.token_gate.issue_token(username, password).await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// `GET /`: reports whether the bearer token is valid.
pub async fn check_token(
    auth: BearerAuth,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.token_gate.verify_token(auth.token()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        mensaje: "Token Valido".to_string(),
    }))
}
