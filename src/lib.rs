//! # Pordego (User Pool Gateway)
//!
//! `pordego` is a thin HTTP facade in front of a managed identity provider
//! (a Cognito-style user pool). It exposes a single dispatch endpoint that
//! translates registration and login requests into provider API calls, and
//! provider responses back into HTTP payloads.
//!
//! The gateway owns no accounts, sessions, or tokens. Credential validation,
//! password hashing, token issuance, lockout, and throttling all live in the
//! provider. Each request is handled independently: exactly one provider call
//! per invocation, no retries, no state shared across requests beyond the
//! provider handle itself.
//!
//! ## Endpoints
//!
//! - `POST /auth` with `{ "action": "register" | "login", "email": ..., "password": ... }`
//! - `GET /health` build and version information
//! - `/swagger-ui` interactive API documentation

pub mod api;
pub mod cli;
pub mod provider;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
