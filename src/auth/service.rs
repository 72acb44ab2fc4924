use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::auth::digest::Digester;
use crate::auth::token::generate_token;
use crate::db::CredentialRepository;
use crate::error::{AppError, AuthError};

/// Issues and verifies bearer tokens.
///
/// At most one token per user is valid: issuing a new one overwrites the
/// stored digest of the previous one. Tokens never expire.
pub struct TokenGate {
    credentials: Arc<dyn CredentialRepository>,
    digester: Arc<dyn Digester>,
    token_length: usize,
}

impl TokenGate {
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        digester: Arc<dyn Digester>,
        token_length: usize,
    ) -> Self {
        Self {
            credentials,
            digester,
            token_length,
        }
    }

    /// Creates a credential for `username`. Fails if it already exists.
    pub async fn provision_user(&self, username: &str, password: &str) -> Result<(), AppError> {
        if self.credentials.find(username).await?.is_some() {
            return Err(AuthError::UserExists.into());
        }

        let password_digest = self.digester.digest(password);
        self.credentials.insert(username, &password_digest).await?;
        info!("Provisioned credential for {}", username);
        Ok(())
    }

    /// Issues a fresh token for a username/password pair and returns it in
    /// plaintext. This is the only place the plaintext is ever exposed.
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<String, AppError> {
        let password_digest = self.digester.digest(password);
        let token = generate_token(self.token_length);
        let token_digest = self.digester.digest(&token);
        let issued_at = Local::now().format("%H:%M").to_string();

        self.credentials
            .store_token(username, &password_digest, &token_digest, &issued_at)
            .await?;

        match self.credentials.token_for(username, &password_digest).await? {
            Some(_) => {
                info!("Issued token for {}", username);
                Ok(token)
            }
            None => {
                warn!("Rejected token request for {}", username);
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }

    /// Succeeds when the digest of `token` matches a stored token digest.
    pub async fn verify_token(&self, token: &str) -> Result<(), AppError> {
        let token_digest = self.digester.digest(token);
        if self.credentials.token_exists(&token_digest).await? {
            Ok(())
        } else {
            warn!("Rejected unknown bearer token");
            Err(AuthError::InvalidToken.into())
        }
    }
}
