//! Custom role definition command implementation.
//!
//! Responsibilities:
//! - List custom roles, optionally at a scope
//! - Create custom roles
//! - Replace existing roles
//! - Delete roles
//!
//! Does NOT handle:
//! - Role assignment (see `assign` module)
//! - Direct REST API calls (handled by client crate)
//!
//! Invariants:
//! - Update sends the full definition; lists not given on the command line are cleared

use anyhow::{Context, Result};
use azure_rest_client::RoleDefinitionParams;
use clap::Subcommand;
use tracing::info;

use crate::commands::CommandContext;
use crate::formatters::{OutputFormat, format_role_definitions, output_result, to_json};

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List custom role definitions
    List {
        /// Scope to list at; defaults to the token's subscription context
        #[arg(long)]
        scope: Option<String>,
    },
    /// Create a custom role
    Create {
        /// Scope to create the role under (e.g., /subscriptions/{id})
        #[arg(long)]
        scope: String,
        /// Role display name
        #[arg(long)]
        name: String,
        /// Role description
        #[arg(long)]
        description: String,
        /// Allowed actions (comma-separated)
        #[arg(long, value_delimiter = ',')]
        actions: Vec<String>,
        /// Excluded actions (comma-separated)
        #[arg(long, value_delimiter = ',')]
        not_actions: Vec<String>,
        /// Scopes the role can be assigned at (comma-separated)
        #[arg(long, value_delimiter = ',')]
        assignable_scopes: Vec<String>,
    },
    /// Replace an existing custom role
    Update {
        /// Scope the role lives under
        #[arg(long)]
        scope: String,
        /// Role definition GUID
        #[arg(long)]
        id: String,
        /// Role display name
        #[arg(long)]
        name: String,
        /// Role description
        #[arg(long)]
        description: String,
        /// Allowed actions (comma-separated, replaces existing)
        #[arg(long, value_delimiter = ',')]
        actions: Vec<String>,
        /// Excluded actions (comma-separated, replaces existing)
        #[arg(long, value_delimiter = ',')]
        not_actions: Vec<String>,
        /// Assignable scopes (comma-separated, replaces existing)
        #[arg(long, value_delimiter = ',')]
        assignable_scopes: Vec<String>,
    },
    /// Delete a custom role
    Delete {
        /// Scope the role lives under
        #[arg(long)]
        scope: String,
        /// Role definition GUID
        #[arg(long)]
        id: String,
    },
}

pub async fn run(ctx: &CommandContext, command: RolesCommand) -> Result<()> {
    match command {
        RolesCommand::List { scope } => run_list(ctx, scope.as_deref()).await,
        RolesCommand::Create {
            scope,
            name,
            description,
            actions,
            not_actions,
            assignable_scopes,
        } => {
            let params = RoleDefinitionParams::new(name, description)
                .actions(actions)
                .not_actions(not_actions)
                .assignable_scopes(assignable_scopes);
            run_create(ctx, &scope, &params).await
        }
        RolesCommand::Update {
            scope,
            id,
            name,
            description,
            actions,
            not_actions,
            assignable_scopes,
        } => {
            let params = RoleDefinitionParams::new(name, description)
                .actions(actions)
                .not_actions(not_actions)
                .assignable_scopes(assignable_scopes);
            run_update(ctx, &scope, &id, &params).await
        }
        RolesCommand::Delete { scope, id } => run_delete(ctx, &scope, &id).await,
    }
}

async fn run_list(ctx: &CommandContext, scope: Option<&str>) -> Result<()> {
    info!("Listing custom roles");

    let roles = ctx
        .client
        .list_role_definitions(&ctx.credential, scope)
        .await
        .context("Failed to list role definitions")?;

    let output = match ctx.format {
        OutputFormat::Json => to_json(&roles)?,
        OutputFormat::Text => format_role_definitions(&roles),
    };
    output_result(&output);
    Ok(())
}

async fn run_create(ctx: &CommandContext, scope: &str, params: &RoleDefinitionParams) -> Result<()> {
    info!("Creating role: {}", params.role_name);

    let role = ctx
        .client
        .create_role_definition(&ctx.credential, scope, params)
        .await
        .with_context(|| format!("Failed to create role '{}'", params.role_name))?;

    let output = match ctx.format {
        OutputFormat::Json => to_json(&role)?,
        OutputFormat::Text => format!(
            "Role '{}' created with id {}.\n",
            role.role_name(),
            role.name
        ),
    };
    output_result(&output);
    Ok(())
}

async fn run_update(
    ctx: &CommandContext,
    scope: &str,
    id: &str,
    params: &RoleDefinitionParams,
) -> Result<()> {
    info!("Replacing role definition: {}", id);

    let confirmation = ctx
        .client
        .update_role_definition(&ctx.credential, scope, id, params)
        .await
        .with_context(|| format!("Failed to update role definition {}", id))?;

    let output = match ctx.format {
        OutputFormat::Json => to_json(&confirmation)?,
        OutputFormat::Text => format!("{}\n", confirmation),
    };
    output_result(&output);
    Ok(())
}

async fn run_delete(ctx: &CommandContext, scope: &str, id: &str) -> Result<()> {
    info!("Deleting role definition: {}", id);

    let payload = ctx
        .client
        .delete_role_definition(&ctx.credential, scope, id)
        .await
        .with_context(|| format!("Failed to delete role definition {}", id))?;

    let output = match ctx.format {
        OutputFormat::Json => to_json(&payload)?,
        OutputFormat::Text => format!("Role definition {} deleted.\n", id),
    };
    output_result(&output);
    Ok(())
}
