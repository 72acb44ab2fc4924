//! Contact endpoints
//!
//! CRUD over contact records keyed by email. Every handler verifies the
//! bearer token before touching the store.

pub mod handlers;
