//! Role definition models for the `Microsoft.Authorization` provider.
//!
//! This module contains the wire types for listing, creating and replacing
//! custom role definitions, plus the caller-facing parameter type.

use serde::{Deserialize, Serialize};

/// Role type sent with every create/update and used for server-side list filtering.
pub const CUSTOM_ROLE_TYPE: &str = "CustomRole";

/// Confirmation text returned by a successful update.
pub const ROLE_UPDATED_MESSAGE: &str = "Role updated successfully";

/// Allowed and excluded actions of a role definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub not_actions: Vec<String>,
}

/// Properties block of a role definition resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinitionProperties {
    pub role_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `CustomRole` or `BuiltInRole`.
    #[serde(rename = "type", default)]
    pub role_type: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub assignable_scopes: Vec<String>,
}

/// A role definition resource as returned by ARM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Fully qualified resource id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The role definition GUID.
    pub name: String,
    /// Resource type, `Microsoft.Authorization/roleDefinitions`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub properties: RoleDefinitionProperties,
}

impl RoleDefinition {
    /// Display name of the role.
    pub fn role_name(&self) -> &str {
        &self.properties.role_name
    }

    /// Allowed actions of the first permission block.
    pub fn actions(&self) -> &[String] {
        self.properties
            .permissions
            .first()
            .map(|p| p.actions.as_slice())
            .unwrap_or(&[])
    }

    /// Excluded actions of the first permission block.
    pub fn not_actions(&self) -> &[String] {
        self.properties
            .permissions
            .first()
            .map(|p| p.not_actions.as_slice())
            .unwrap_or(&[])
    }

    /// Scopes at which the role can be assigned.
    pub fn assignable_scopes(&self) -> &[String] {
        &self.properties.assignable_scopes
    }
}

/// Role definition list response.
#[derive(Debug, Deserialize, Clone)]
pub struct RoleDefinitionListResponse {
    #[serde(default)]
    pub value: Vec<RoleDefinition>,
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

/// Parameters for creating or replacing a custom role.
///
/// A replace is a full overwrite: any list left empty here is sent as an
/// empty list and clears what the service had stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDefinitionParams {
    pub role_name: String,
    pub description: String,
    pub actions: Vec<String>,
    pub not_actions: Vec<String>,
    pub assignable_scopes: Vec<String>,
}

impl RoleDefinitionParams {
    /// Start parameters with empty action and scope lists.
    pub fn new(role_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    pub fn not_actions<I, S>(mut self, not_actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_actions = not_actions.into_iter().map(Into::into).collect();
        self
    }

    pub fn assignable_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignable_scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Request body for `PUT .../roleDefinitions/{id}`.
    pub(crate) fn to_request_body(&self, role_definition_id: &str) -> RoleDefinition {
        RoleDefinition {
            id: None,
            name: role_definition_id.to_string(),
            resource_type: None,
            properties: RoleDefinitionProperties {
                role_name: self.role_name.clone(),
                description: Some(self.description.clone()),
                role_type: Some(CUSTOM_ROLE_TYPE.to_string()),
                permissions: vec![Permission {
                    actions: self.actions.clone(),
                    not_actions: self.not_actions.clone(),
                }],
                assignable_scopes: self.assignable_scopes.clone(),
            },
        }
    }
}

/// Returned by a successful update in place of the refreshed entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleUpdateConfirmation {
    pub role_definition_id: String,
    pub message: &'static str,
}

impl RoleUpdateConfirmation {
    pub(crate) fn new(role_definition_id: &str) -> Self {
        Self {
            role_definition_id: role_definition_id.to_string(),
            message: ROLE_UPDATED_MESSAGE,
        }
    }
}

impl std::fmt::Display for RoleUpdateConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}
