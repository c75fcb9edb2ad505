//! Main Azure Resource Manager client and API methods.
//!
//! This module provides [`AzureClient`], a small handle holding the HTTP
//! client, management endpoint and API versions. The caller passes a
//! [`Credential`](crate::Credential) to every call.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `role_definitions`: Custom role definition methods
//! - `role_assignments`: Role assignment methods
//! - `metrics`: Resource metrics methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token acquisition or refresh
//!
//! # Invariants
//! - Every method performs exactly one HTTP round trip, or none when its
//!   inputs are rejected up front.
//! - The client holds no mutable state, so it can be shared across tasks.

pub mod builder;

mod metrics;
mod role_assignments;
mod role_definitions;

/// Azure Resource Manager REST client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use azure_rest_client::{AzureClient, Credential};
///
/// let client = AzureClient::builder()
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// let roles = client
///     .list_role_definitions(&Credential::new(token), Some("/subscriptions/..."))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct AzureClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) role_api_version: String,
    pub(crate) metrics_api_version: String,
}

impl AzureClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AzureClientBuilder {
        builder::AzureClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API version used for role definitions and assignments.
    pub fn role_api_version(&self) -> &str {
        &self.role_api_version
    }

    /// API version used for metrics.
    pub fn metrics_api_version(&self) -> &str {
        &self.metrics_api_version
    }
}
