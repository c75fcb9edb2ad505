//! Resource metrics methods for [`AzureClient`].
//!
//! # What this module handles:
//! - Turning the caller's `hours` / `days` into a [`TimeWindow`]
//! - Rejecting a missing or conflicting window before any request is sent
//!
//! # What this module does NOT handle:
//! - Response shaping (in [`crate::models::MetricSummary`])

use crate::auth::Credential;
use crate::client::AzureClient;
use crate::endpoints;
use crate::error::MetricsError;
use crate::models::{MetricSummary, ResourceRef};
use crate::timespan::TimeWindow;

impl AzureClient {
    /// Fetch a metric over the last `hours` or `days` and summarize it.
    ///
    /// Exactly one of `hours` and `days` must be given.
    pub async fn fetch_metrics(
        &self,
        credential: &Credential,
        scope: &str,
        resource: &ResourceRef,
        metric_names: &[&str],
        hours: Option<u32>,
        days: Option<u32>,
    ) -> Result<MetricSummary, MetricsError> {
        let window = TimeWindow::from_options(hours, days)?;
        self.fetch_metrics_window(credential, scope, resource, metric_names, window)
            .await
    }

    /// Same as [`fetch_metrics`](Self::fetch_metrics) with an explicit window.
    pub async fn fetch_metrics_window(
        &self,
        credential: &Credential,
        scope: &str,
        resource: &ResourceRef,
        metric_names: &[&str],
        window: TimeWindow,
    ) -> Result<MetricSummary, MetricsError> {
        let timespan = window.timespan()?;
        endpoints::fetch_metrics(
            &self.http,
            &self.base_url,
            credential.expose(),
            scope,
            resource,
            metric_names,
            &timespan,
            &self.metrics_api_version,
        )
        .await
    }
}
