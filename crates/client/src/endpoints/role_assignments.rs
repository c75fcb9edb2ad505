//! Role assignment endpoints.

use reqwest::Client;
use uuid::Uuid;

use crate::endpoints::request::{authorize, read_optional_json, send_request};
use crate::endpoints::{require_path_segment, require_scope, scope_url};
use crate::error::{RequestError, RoleAssignmentError};
use crate::models::RoleAssignment;

const ROLE_ASSIGNMENTS_PATH: &str = "providers/Microsoft.Authorization/roleAssignments";
const ROLE_DEFINITIONS_PATH: &str = "providers/Microsoft.Authorization/roleDefinitions";

/// Assign a role definition to a principal at a scope.
///
/// A new assignment id is generated for every call. `role_definition_id`
/// may be a bare GUID, which is qualified with `scope`, or an already
/// fully qualified id starting with `/`.
pub async fn assign_role(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: &str,
    role_definition_id: &str,
    principal_id: &str,
    api_version: &str,
) -> Result<RoleAssignment, RoleAssignmentError> {
    let scope = require_scope(scope)?;
    let role_assignment_id = Uuid::new_v4().to_string();
    let path = format!("{}/{}", ROLE_ASSIGNMENTS_PATH, role_assignment_id);
    let url = scope_url(base_url, scope, &path);

    let body = RoleAssignment::request_body(
        role_definition_path(scope, role_definition_id)?,
        principal_id,
    );
    let builder = authorize(client.put(&url), auth_token)
        .query(&[("api-version", api_version)])
        .json(&body);
    let response = send_request(builder, &path, "PUT").await?;

    read_optional_json::<RoleAssignment>(response)
        .await?
        .ok_or_else(|| {
            RoleAssignmentError::Unexpected(format!(
                "empty response creating role assignment {}",
                role_assignment_id
            ))
        })
}

/// Fully qualified role definition id under `scope`.
fn role_definition_path(scope: &str, role_definition_id: &str) -> Result<String, RequestError> {
    if role_definition_id.starts_with('/') {
        return Ok(role_definition_id.to_string());
    }
    Ok(format!(
        "/{}/{}/{}",
        scope.trim_matches('/'),
        ROLE_DEFINITIONS_PATH,
        require_path_segment(role_definition_id, "role definition id")?
    ))
}
