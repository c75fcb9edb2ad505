//! Role assignment models for the `Microsoft.Authorization` provider.

use serde::{Deserialize, Serialize};

/// Properties block of a role assignment resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentProperties {
    /// Fully qualified role definition id.
    pub role_definition_id: String,
    /// Object id of the user, group or service principal.
    pub principal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// A role assignment resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The role assignment GUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub properties: RoleAssignmentProperties,
}

impl RoleAssignment {
    /// Request body for `PUT .../roleAssignments/{id}`.
    pub(crate) fn request_body(role_definition_path: String, principal_id: &str) -> Self {
        Self {
            id: None,
            name: None,
            resource_type: None,
            properties: RoleAssignmentProperties {
                role_definition_id: role_definition_path,
                principal_id: principal_id.to_string(),
                principal_type: None,
                scope: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_only_carries_link() {
        let body = RoleAssignment::request_body(
            "/subscriptions/s/providers/Microsoft.Authorization/roleDefinitions/r".to_string(),
            "p-1",
        );
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "properties": {
                    "roleDefinitionId": "/subscriptions/s/providers/Microsoft.Authorization/roleDefinitions/r",
                    "principalId": "p-1"
                }
            })
        );
    }
}
