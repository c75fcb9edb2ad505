//! CLI command implementations.

pub mod assign;
pub mod metrics;
pub mod roles;

use anyhow::{Context, Result};
use azure_rest_client::{AzureClient, Credential};
use azure_rest_config::Config;

use crate::formatters::OutputFormat;

/// Everything a command needs to talk to the service and print results.
pub struct CommandContext {
    pub client: AzureClient,
    pub credential: Credential,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn from_config(config: &Config, format: OutputFormat) -> Result<Self> {
        let client = AzureClient::builder()
            .from_config(config)
            .build()
            .context("Failed to build Azure client")?;

        Ok(Self {
            client,
            credential: Credential::from(config.auth.access_token.clone()),
            format,
        })
    }
}
