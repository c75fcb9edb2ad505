//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate the metrics time window; the client does.

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "azure-rest")]
#[command(about = "Manage Azure custom roles, role assignments and metrics", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  azure-rest roles list --scope /subscriptions/$SUB\n  azure-rest assign --scope /subscriptions/$SUB --role-definition-id $ROLE --principal-id $OID\n  azure-rest metrics --scope /subscriptions/$SUB/resourceGroups/rg --namespace Microsoft.Storage --resource-type storageAccounts --resource-name acct --metric Transactions --hours 24\n"
)]
pub struct Cli {
    /// Management endpoint (e.g., https://management.azure.com)
    #[arg(short, long, global = true, env = "AZURE_MANAGEMENT_URL")]
    pub base_url: Option<String>,

    /// Bearer access token for Azure Resource Manager
    #[arg(short, long, global = true, env = "AZURE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AZURE_REST_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and manage custom role definitions
    Roles {
        #[command(subcommand)]
        command: commands::roles::RolesCommand,
    },

    /// Assign a role definition to a principal
    Assign {
        /// Scope of the assignment (e.g., /subscriptions/{id})
        #[arg(long)]
        scope: String,

        /// Role definition GUID, or a fully qualified role definition id
        #[arg(long)]
        role_definition_id: String,

        /// Object id of the user, group or service principal
        #[arg(long)]
        principal_id: String,
    },

    /// Fetch a metric for a resource over the last hours or days
    Metrics {
        /// Scope containing the resource (subscription or resource group)
        #[arg(long)]
        scope: String,

        /// Resource provider namespace (e.g., Microsoft.Storage)
        #[arg(long)]
        namespace: String,

        /// Resource type (e.g., storageAccounts)
        #[arg(long)]
        resource_type: String,

        /// Resource name
        #[arg(long)]
        resource_name: String,

        /// Metric names (comma-separated)
        #[arg(long = "metric", value_delimiter = ',', required = true)]
        metrics: Vec<String>,

        /// Look back this many hours
        #[arg(long)]
        hours: Option<u32>,

        /// Look back this many days
        #[arg(long)]
        days: Option<u32>,
    },
}
