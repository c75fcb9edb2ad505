//! Resource metrics endpoint.

use reqwest::Client;

use crate::endpoints::request::{authorize, read_json, send_request};
use crate::endpoints::{require_path_segment, require_scope, scope_url};
use crate::error::MetricsError;
use crate::models::{MetricSummary, MetricsResponse, ResourceRef};

/// Fetch one metric window for a resource and summarize it.
///
/// `timespan` is the ISO-8601 interval built by [`crate::TimeWindow`].
#[allow(clippy::too_many_arguments)]
pub async fn fetch_metrics(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: &str,
    resource: &ResourceRef,
    metric_names: &[&str],
    timespan: &str,
    api_version: &str,
) -> Result<MetricSummary, MetricsError> {
    if metric_names.iter().all(|n| n.trim().is_empty()) {
        return Err(MetricsError::MissingMetricNames);
    }

    let scope = require_scope(scope)?;
    let path = format!(
        "providers/{}/{}/{}/providers/microsoft.insights/metrics",
        require_path_segment(&resource.namespace, "resource namespace")?,
        require_path_segment(&resource.resource_type, "resource type")?,
        require_path_segment(&resource.name, "resource name")?,
    );
    let url = scope_url(base_url, scope, &path);
    let metric_names = metric_names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    let builder = authorize(client.get(&url), auth_token).query(&[
        ("api-version", api_version),
        ("metricnames", metric_names.as_str()),
        ("timespan", timespan),
    ]);
    let response = send_request(builder, &path, "GET").await?;

    let resp: MetricsResponse = read_json(response).await?;
    MetricSummary::from_response(resource, resp)
}
