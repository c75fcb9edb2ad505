//! Connection configuration types for the Azure REST client.
//!
//! Responsibilities:
//! - Define connection settings (management URL, API versions, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_MANAGEMENT_URL, DEFAULT_METRICS_API_VERSION, DEFAULT_ROLE_API_VERSION,
    DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Azure Resource Manager endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Management endpoint (e.g., https://management.azure.com)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// API version for role definitions and role assignments
    #[serde(default = "default_role_api_version")]
    pub role_api_version: String,
    /// API version for the metrics endpoint
    #[serde(default = "default_metrics_api_version")]
    pub metrics_api_version: String,
}

fn default_role_api_version() -> String {
    DEFAULT_ROLE_API_VERSION.to_string()
}

fn default_metrics_api_version() -> String {
    DEFAULT_METRICS_API_VERSION.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MANAGEMENT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            role_api_version: default_role_api_version(),
            metrics_api_version: default_metrics_api_version(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config targeting the public cloud with the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig::new(token),
        }
    }
}
