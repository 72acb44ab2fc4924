use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::auth::MIN_TOKEN_LENGTH;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Credential store (`usuarios` table).
    pub users_url: String,
    /// Contact store (`contactos` table).
    pub contacts_url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BootstrapUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub token_length: usize,
    /// Credential provisioned at startup when it does not exist yet.
    pub bootstrap: Option<BootstrapUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allow_any_origin: bool,
    pub allowed_origins: Vec<String>,
    pub max_age: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
}

const DEFAULT_ORIGINS: [&str; 2] = [
    "http://127.0.0.1:5000",
    "https://herok-frontend-a476fdd3e0e6.herokuapp.com",
];

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("environment", "development")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("database.users_url", "sqlite://usuarios.db")?
            .set_default("database.contacts_url", "sqlite://contactos.db")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.token_length", 16)?
            .set_default("cors.enabled", true)?
            .set_default("cors.allow_any_origin", true)?
            .set_default("cors.allowed_origins", DEFAULT_ORIGINS.to_vec())?
            .set_default("cors.max_age", 3600)?

            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))

            // E.g., `APP_SERVER__PORT=5001` would set `Settings.server.port`
            .add_source(
                Environment::with_prefix("app")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        Self::from_config(s)
    }

    /// Settings backed by private in-memory databases. Each store gets a
    /// single connection so the in-memory database outlives every query.
    pub fn new_for_test() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("environment", "test")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.workers", 1)?
            .set_default("database.users_url", "sqlite::memory:")?
            .set_default("database.contacts_url", "sqlite::memory:")?
            .set_default("database.max_connections", 1)?
            .set_default("auth.token_length", 16)?
            .set_default("cors.enabled", true)?
            .set_default("cors.allow_any_origin", true)?
            .set_default("cors.allowed_origins", DEFAULT_ORIGINS.to_vec())?
            .set_default("cors.max_age", 3600)?
            .build()?;

        Self::from_config(s)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.token_length < MIN_TOKEN_LENGTH {
            return Err(ConfigError::Message(format!(
                "auth.token_length must be at least {}, got {}",
                MIN_TOKEN_LENGTH, self.auth.token_length
            )));
        }
        Ok(())
    }
}
