//! Centralized constants for the Azure REST workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default Azure Resource Manager endpoint (public cloud).
pub const DEFAULT_MANAGEMENT_URL: &str = "https://management.azure.com";

/// API version used for `Microsoft.Authorization` role definitions and assignments.
pub const DEFAULT_ROLE_API_VERSION: &str = "2022-04-01";

/// API version used for `microsoft.insights` metrics.
pub const DEFAULT_METRICS_API_VERSION: &str = "2018-01-01";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the management endpoint (sovereign clouds, test servers).
pub const ENV_MANAGEMENT_URL: &str = "AZURE_MANAGEMENT_URL";

/// Bearer token sent with every request.
pub const ENV_ACCESS_TOKEN: &str = "AZURE_ACCESS_TOKEN";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "AZURE_REST_TIMEOUT";

/// Role definition / assignment API version override.
pub const ENV_ROLE_API_VERSION: &str = "AZURE_ROLE_API_VERSION";

/// Metrics API version override.
pub const ENV_METRICS_API_VERSION: &str = "AZURE_METRICS_API_VERSION";
