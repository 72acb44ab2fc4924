pub mod auth;
pub mod config;
pub mod contacts;
pub mod db;
pub mod error;

use std::sync::Arc;
use actix_web::{web, HttpResponse};
use tracing::info;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use crate::config::Settings;

pub use auth::{Digester, Sha256Digester, TokenGate};
pub use db::{Contact, ContactRepository, CredentialRepository};

use db::{SqliteContactStore, SqliteCredentialStore};

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Registers every route of the service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    use auth::handlers::{check_token, issue_token};
    use contacts::handlers::{
        create_contact, delete_contact, get_contact, list_contacts, update_contact,
    };

    cfg.route("/health", web::get().to(health_check))
        .route("/token", web::get().to(issue_token))
        .route("/", web::get().to(check_token))
        .service(
            web::resource("/contactos")
                .route(web::post().to(create_contact))
                .route(web::get().to(list_contacts)),
        )
        .service(
            web::resource("/contactos/{email}")
                .route(web::get().to(get_contact))
                .route(web::put().to(update_contact))
                .route(web::delete().to(delete_contact)),
        );
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub token_gate: Arc<TokenGate>,
    pub contacts: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Connects both SQLite stores, creates their tables and provisions the
    /// bootstrap credential when one is configured.
    pub async fn new(config: Settings) -> Result<Self> {
        let users_pool = db::connect(&config.database.users_url, config.database.max_connections).await?;
        let contacts_pool = db::connect(&config.database.contacts_url, config.database.max_connections).await?;

        let credentials = SqliteCredentialStore::new(users_pool);
        credentials.migrate().await?;
        let contacts = SqliteContactStore::new(contacts_pool);
        contacts.migrate().await?;

        let token_gate = TokenGate::new(
            Arc::new(credentials),
            Arc::new(Sha256Digester),
            config.auth.token_length,
        );

        if let Some(bootstrap) = &config.auth.bootstrap {
            match token_gate.provision_user(&bootstrap.username, &bootstrap.password).await {
                Ok(()) => {}
                Err(AppError::AuthError(error::AuthError::UserExists)) => {
                    info!("Bootstrap credential {} already present", bootstrap.username);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Self::from_parts(config, Arc::new(token_gate), Arc::new(contacts)))
    }

    /// Assembles state from already-built components.
    pub fn from_parts(
        config: Settings,
        token_gate: Arc<TokenGate>,
        contacts: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            token_gate,
            contacts,
        }
    }
}
