#![allow(dead_code)]

use actix_web_httpauth::headers::authorization::Basic;
use contactos_server::{AppState, Settings};

pub const USERNAME: &str = "ana@example.com";
pub const PASSWORD: &str = "hunter2";

/// State over fresh in-memory stores with one provisioned credential.
pub async fn test_state() -> AppState {
    let config = Settings::new_for_test().expect("Failed to load test config");
    let state = AppState::new(config).await.expect("Failed to build state");
    state
        .token_gate
        .provision_user(USERNAME, PASSWORD)
        .await
        .expect("Failed to provision user");
    state
}

pub fn basic(username: &'static str, password: &'static str) -> (&'static str, Basic) {
    ("Authorization", Basic::new(username, Some(password)))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
