//! Shared test utilities for azure-rest integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (token, base URL).
//!
//! Invariants / Assumptions:
//! - `AZURE_ACCESS_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Subscription scope used by the CLI tests.
#[allow(dead_code)]
pub const SCOPE: &str = "/subscriptions/00000000-0000-0000-0000-000000000001";

/// Returns a hermetic `azure-rest` command for integration testing.
pub fn azure_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("azure-rest");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Satisfy configuration requirements
    cmd.env("AZURE_ACCESS_TOKEN", "test-token");

    // Clear potential host leakage
    cmd.env_remove("AZURE_MANAGEMENT_URL")
        .env_remove("AZURE_REST_TIMEOUT")
        .env_remove("AZURE_ROLE_API_VERSION")
        .env_remove("AZURE_METRICS_API_VERSION");

    cmd
}

/// Returns a hermetic `azure-rest` command pointed at `base_url`.
#[allow(dead_code)]
pub fn azure_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = azure_cmd();
    cmd.env("AZURE_MANAGEMENT_URL", base_url);
    cmd
}
