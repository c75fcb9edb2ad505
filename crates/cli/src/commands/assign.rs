//! Role assignment command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::CommandContext;
use crate::formatters::{OutputFormat, format_role_assignment, output_result, to_json};

pub async fn run(
    ctx: &CommandContext,
    scope: &str,
    role_definition_id: &str,
    principal_id: &str,
) -> Result<()> {
    info!("Assigning role {} to {}", role_definition_id, principal_id);

    let assignment = ctx
        .client
        .assign_role(&ctx.credential, scope, role_definition_id, principal_id)
        .await
        .context("Failed to assign role")?;

    let output = match ctx.format {
        OutputFormat::Json => to_json(&assignment)?,
        OutputFormat::Text => format_role_assignment(&assignment),
    };
    output_result(&output);
    Ok(())
}
