//! Metric models for the `microsoft.insights` metrics API.
//!
//! This module contains the wire types of a metrics response and the
//! [`MetricSummary`] built from it: the first time series of the first
//! metric, with zero-total samples dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MetricsError;
use crate::format::{format_value, render_table};

/// Resource triple identifying the metric source under a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    /// Provider namespace, e.g. `Microsoft.Storage`.
    pub namespace: String,
    /// Resource type, e.g. `storageAccounts`.
    pub resource_type: String,
    /// Resource name.
    pub name: String,
}

impl ResourceRef {
    pub fn new(
        namespace: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

/// Name with optional localized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizableString {
    pub value: String,
    #[serde(default)]
    pub localized_value: Option<String>,
}

/// One aggregated data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
}

/// A series of samples, one per dimension combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    #[serde(default)]
    pub data: Vec<MetricSample>,
}

/// A single metric within a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[serde(default)]
    pub id: Option<String>,
    pub name: LocalizableString,
    #[serde(default)]
    pub display_description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub timeseries: Vec<TimeSeries>,
}

/// Metrics endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub timespan: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub value: Vec<Metric>,
}

/// Keep samples whose total is not zero, in their original order.
///
/// Samples without a total are kept.
pub fn drop_zero_totals(samples: Vec<MetricSample>) -> Vec<MetricSample> {
    samples
        .into_iter()
        .filter(|s| s.total != Some(0.0))
        .collect()
}

/// Human-readable result of a metrics query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub resource_type: String,
    pub resource_name: String,
    pub timespan: String,
    pub metric_type: String,
    pub description: String,
    pub samples: Vec<MetricSample>,
}

impl MetricSummary {
    /// Build the summary from a decoded response.
    ///
    /// Only `value[0].timeseries[0]` is read; additional metrics and series
    /// are ignored.
    pub fn from_response(
        resource: &ResourceRef,
        response: MetricsResponse,
    ) -> Result<Self, MetricsError> {
        let timespan = response.timespan.ok_or(MetricsError::MissingField("timespan"))?;
        let metric_count = response.value.len();
        let metric = response
            .value
            .into_iter()
            .next()
            .ok_or(MetricsError::MissingField("value[0]"))?;

        if metric_count > 1 {
            tracing::debug!(metric_count, "Ignoring metrics after the first");
        }
        if metric.timeseries.len() > 1 {
            tracing::debug!(
                series_count = metric.timeseries.len(),
                metric = %metric.name.value,
                "Ignoring time series after the first"
            );
        }

        let series = metric
            .timeseries
            .into_iter()
            .next()
            .ok_or(MetricsError::MissingField("value[0].timeseries[0]"))?;

        Ok(Self {
            resource_type: resource.resource_type.clone(),
            resource_name: resource.name.clone(),
            timespan,
            metric_type: metric.name.value,
            description: metric.display_description.unwrap_or_default(),
            samples: drop_zero_totals(series.data),
        })
    }

    /// Render the samples as a table.
    ///
    /// Only columns with at least one value are shown.
    pub fn sample_table(&self) -> String {
        let columns: [(&str, fn(&MetricSample) -> Option<f64>); 5] = [
            ("total", |s| s.total),
            ("average", |s| s.average),
            ("minimum", |s| s.minimum),
            ("maximum", |s| s.maximum),
            ("count", |s| s.count),
        ];
        let present: Vec<_> = columns
            .iter()
            .filter(|(_, get)| self.samples.iter().any(|s| get(s).is_some()))
            .collect();

        let mut headers = vec!["timeStamp"];
        headers.extend(present.iter().map(|(name, _)| *name));

        let rows: Vec<Vec<String>> = self
            .samples
            .iter()
            .map(|sample| {
                let mut row = vec![sample.time_stamp.format("%Y-%m-%d %H:%M:%S%:z").to_string()];
                row.extend(
                    present
                        .iter()
                        .map(|(_, get)| get(sample).map(format_value).unwrap_or_default()),
                );
                row
            })
            .collect();

        render_table(&headers, &rows)
    }
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "resourceType: {}", self.resource_type)?;
        writeln!(f, "resourceName: {}", self.resource_name)?;
        writeln!(f, "Time span: {}", self.timespan)?;
        writeln!(f, "Metrics type: {}", self.metric_type)?;
        writeln!(f, "Description: {}", self.description)?;
        if self.samples.is_empty() {
            write!(f, "(no non-zero samples)")
        } else {
            write!(f, "{}", self.sample_table())
        }
    }
}
