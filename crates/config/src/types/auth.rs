//! Authentication types for the Azure REST configuration.
//!
//! Responsibilities:
//! - Hold the caller-supplied bearer token.
//! - Handle serialization of the secret value.
//!
//! Does NOT handle:
//! - Acquiring or refreshing tokens.
//!
//! Invariants:
//! - The token is always a `secrecy::SecretString` and never shows up in `Debug` output.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token attached as `Authorization: Bearer <token>`.
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

impl AuthConfig {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::new(token.into().into()),
        }
    }
}
