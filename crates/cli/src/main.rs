//! azure-rest - Command-line interface for Azure Resource Manager RBAC and metrics.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build configuration and run commands via the shared client library.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Token acquisition; the bearer token is supplied by the caller.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout only carries command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use azure_rest_config::ConfigLoader;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = match ConfigLoader::new().from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // CLI overrides (highest priority)
    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_access_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = tokio::select! {
        result = run_command(cli, config) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("{:#}", e);
                e.exit_code()
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Operation cancelled by user");
            ExitCode::Interrupted
        }
    };

    std::process::exit(exit_code.as_i32());
}
