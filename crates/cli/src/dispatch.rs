//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Build the client and credential once from the resolved configuration.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use azure_rest_config::Config;

use crate::args::{Cli, Commands};
use crate::commands::{self, CommandContext};
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let ctx = CommandContext::from_config(&config, format)?;

    match cli.command {
        Commands::Roles { command } => {
            commands::roles::run(&ctx, command).await?;
        }
        Commands::Assign {
            scope,
            role_definition_id,
            principal_id,
        } => {
            commands::assign::run(&ctx, &scope, &role_definition_id, &principal_id).await?;
        }
        Commands::Metrics {
            scope,
            namespace,
            resource_type,
            resource_name,
            metrics,
            hours,
            days,
        } => {
            let request = commands::metrics::MetricsRequest {
                scope,
                namespace,
                resource_type,
                resource_name,
                metrics,
                hours,
                days,
            };
            commands::metrics::run(&ctx, request).await?;
        }
    }

    Ok(())
}
