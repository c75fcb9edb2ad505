//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP round trip against Azure Resource
//! Manager. They take the raw `reqwest::Client`, base URL, token and API
//! version so tests can call them directly against a mock server;
//! [`crate::AzureClient`] wraps them with its stored settings.

mod metrics;
mod request;
mod role_assignments;
mod role_definitions;
pub mod url_encoding;

pub use metrics::fetch_metrics;
pub use request::{authorize, read_json, read_optional_json, send_request};
pub use role_assignments::assign_role;
pub use role_definitions::{
    create_role_definition, delete_role_definition, list_role_definitions,
    update_role_definition,
};
pub use url_encoding::{encode_path_segment, require_path_segment};

use crate::error::RequestError;

/// Join base URL, scope and provider path without doubling slashes.
///
/// An empty scope yields a tenant/subscription-context URL (`{base}/{path}`).
pub(crate) fn scope_url(base_url: &str, scope: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let scope = scope.trim_matches('/');
    let path = path.trim_start_matches('/');
    if scope.is_empty() {
        format!("{}/{}", base, path)
    } else {
        format!("{}/{}/{}", base, scope, path)
    }
}

/// Reject scopes that are empty once surrounding slashes are removed.
pub(crate) fn require_scope(scope: &str) -> Result<&str, RequestError> {
    let trimmed = scope.trim_matches('/');
    if trimmed.is_empty() {
        return Err(RequestError::InvalidUrl("scope must not be empty".to_string()));
    }
    Ok(trimmed)
}
