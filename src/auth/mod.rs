//! Authentication module for the contact service
//!
//! Issues bearer tokens against username/password credentials and
//! verifies them on every protected request.

pub mod digest;
pub mod handlers;
mod service;
mod token;

pub use digest::{Digester, Sha256Digester};
pub use service::TokenGate;
pub use token::{generate_token, MIN_TOKEN_LENGTH, TOKEN_ALPHABET};
