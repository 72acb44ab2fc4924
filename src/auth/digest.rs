//! One-way digests for stored secrets.
//!
//! Passwords and tokens are only ever persisted as the output of a
//! [`Digester`]. The default is an unsalted SHA-256 rendered as lowercase
//! hex, which matches rows written by earlier deployments. A slower,
//! salted scheme can be plugged in by implementing the trait and handing
//! it to [`TokenGate`](super::TokenGate).

use sha2::{Digest, Sha256};

pub trait Digester: Send + Sync {
    fn digest(&self, input: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Digester;

impl Digester for Sha256Digester {
    fn digest(&self, input: &str) -> String {
        format!("{:x}", Sha256::digest(input.as_bytes()))
    }
}
