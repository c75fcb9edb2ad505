//! Client builder for constructing [`AzureClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`AzureClient`] methods)
//!
//! # Invariants
//! - Every setting has a default; `build()` succeeds with no calls at all
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use azure_rest_config::{
    Config,
    constants::{
        DEFAULT_MANAGEMENT_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_METRICS_API_VERSION,
        DEFAULT_ROLE_API_VERSION, DEFAULT_TIMEOUT_SECS,
    },
};

use crate::client::AzureClient;
use crate::error::RequestError;

/// Builder for creating a new [`AzureClient`].
///
/// # Example
///
/// ```rust,ignore
/// use azure_rest_client::AzureClient;
///
/// let client = AzureClient::builder()
///     .base_url("https://management.usgovcloudapi.net".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct AzureClientBuilder {
    base_url: String,
    timeout: Duration,
    role_api_version: String,
    metrics_api_version: String,
}

impl Default for AzureClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MANAGEMENT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            role_api_version: DEFAULT_ROLE_API_VERSION.to_string(),
            metrics_api_version: DEFAULT_METRICS_API_VERSION.to_string(),
        }
    }
}

impl AzureClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the management endpoint, e.g. `https://management.azure.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the role definition / assignment API version.
    pub fn role_api_version(mut self, version: String) -> Self {
        self.role_api_version = version;
        self
    }

    /// Set the metrics API version.
    pub fn metrics_api_version(mut self, version: String) -> Self {
        self.metrics_api_version = version;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self.role_api_version = config.connection.role_api_version.clone();
        self.metrics_api_version = config.connection.metrics_api_version.clone();
        self
    }

    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`AzureClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidUrl`] if the base URL does not parse.
    /// Returns [`RequestError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<AzureClient, RequestError> {
        let base_url = Self::normalize_base_url(&self.base_url);
        reqwest::Url::parse(&base_url)
            .map_err(|e| RequestError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(AzureClient {
            http,
            base_url,
            role_api_version: self.role_api_version,
            metrics_api_version: self.metrics_api_version,
        })
    }
}
