//! Azure Resource Manager REST client.
//!
//! This crate provides a small typed client for a handful of ARM
//! operations: custom role definitions, role assignments and resource
//! metrics. Every call takes a caller-supplied bearer [`Credential`] and
//! performs a single request.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod models;
pub mod timespan;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::Credential;
pub use client::AzureClient;
pub use client::builder::AzureClientBuilder;
pub use error::{MetricsError, RequestError, RoleAssignmentError, RoleDefinitionError};
pub use models::{
    MetricSample, MetricSummary, Permission, ResourceRef, RoleAssignment, RoleDefinition,
    RoleDefinitionParams, RoleUpdateConfirmation,
};
pub use timespan::TimeWindow;
