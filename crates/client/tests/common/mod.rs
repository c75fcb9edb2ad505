//! Common test utilities for integration tests.
//!
//! This module provides shared helpers and re-exports commonly used types
//! for testing the Azure client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use azure_rest_client::testing::load_fixture;

#[allow(unused_imports)]
pub use azure_rest_client::{AzureClient, Credential};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use azure_rest_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Subscription scope used throughout the tests.
#[allow(dead_code)]
pub const SCOPE: &str = "/subscriptions/00000000-0000-0000-0000-000000000001";

/// Path of the role definition collection under [`SCOPE`].
#[allow(dead_code)]
pub const ROLE_DEFINITIONS_PATH: &str = "/subscriptions/00000000-0000-0000-0000-000000000001/providers/Microsoft.Authorization/roleDefinitions";

/// Client pointed at the mock server with default API versions.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> AzureClient {
    AzureClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build against the mock server")
}

/// Credential carrying a fixed test token.
#[allow(dead_code)]
pub fn test_credential() -> Credential {
    Credential::new("test-token")
}
