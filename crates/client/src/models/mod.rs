//! Data models for Azure Resource Manager API responses.
//!
//! This module contains all the data structures used to represent
//! requests to and responses from the ARM REST endpoints.

pub mod metrics;
pub mod role_assignments;
pub mod role_definitions;

pub use metrics::{
    LocalizableString, Metric, MetricSample, MetricSummary, MetricsResponse, ResourceRef,
    TimeSeries, drop_zero_totals,
};
pub use role_assignments::{RoleAssignment, RoleAssignmentProperties};
pub use role_definitions::{
    CUSTOM_ROLE_TYPE, Permission, ROLE_UPDATED_MESSAGE, RoleDefinition,
    RoleDefinitionListResponse, RoleDefinitionParams, RoleDefinitionProperties,
    RoleUpdateConfirmation,
};
