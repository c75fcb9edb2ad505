//! Metrics command implementation.
//!
//! Responsibilities:
//! - Fetch one metric window for a resource
//! - Print the summary (text) or the summary fields (JSON)
//!
//! Does NOT handle:
//! - Time window validation (the client rejects missing or conflicting windows)

use anyhow::{Context, Result};
use azure_rest_client::ResourceRef;
use tracing::info;

use crate::commands::CommandContext;
use crate::formatters::{OutputFormat, output_result, to_json};

/// Arguments of the `metrics` command.
#[derive(Debug)]
pub struct MetricsRequest {
    pub scope: String,
    pub namespace: String,
    pub resource_type: String,
    pub resource_name: String,
    pub metrics: Vec<String>,
    pub hours: Option<u32>,
    pub days: Option<u32>,
}

pub async fn run(ctx: &CommandContext, request: MetricsRequest) -> Result<()> {
    info!(
        resource = %request.resource_name,
        metrics = ?request.metrics,
        "Fetching metrics"
    );

    let resource = ResourceRef::new(
        request.namespace,
        request.resource_type,
        request.resource_name,
    );
    let metric_names: Vec<&str> = request.metrics.iter().map(String::as_str).collect();

    let summary = ctx
        .client
        .fetch_metrics(
            &ctx.credential,
            &request.scope,
            &resource,
            &metric_names,
            request.hours,
            request.days,
        )
        .await
        .context("Failed to fetch metrics")?;

    let output = match ctx.format {
        OutputFormat::Json => to_json(&summary)?,
        OutputFormat::Text => format!("{}\n", summary),
    };
    output_result(&output);
    Ok(())
}
