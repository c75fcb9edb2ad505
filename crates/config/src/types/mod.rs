//! Configuration type definitions for the Azure REST client.
//!
//! Responsibilities:
//! - Define connection settings (management URL, API versions, timeout).
//! - Define the bearer-token authentication settings.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Token acquisition or refresh (the caller supplies a valid token).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
