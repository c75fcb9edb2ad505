//! Custom role definition endpoints.

use reqwest::{Client, Response};
use tracing::debug;
use uuid::Uuid;

use crate::endpoints::request::{authorize, read_json, read_optional_json, send_request};
use crate::endpoints::{require_path_segment, require_scope, scope_url};
use crate::error::{RequestError, RoleDefinitionError};
use crate::models::{
    CUSTOM_ROLE_TYPE, RoleDefinition, RoleDefinitionListResponse, RoleDefinitionParams,
    RoleUpdateConfirmation,
};

const ROLE_DEFINITIONS_PATH: &str = "providers/Microsoft.Authorization/roleDefinitions";

/// List custom role definitions.
///
/// Without a scope the listing runs in the subscription context the token
/// is authorized for. Only the first page is returned.
pub async fn list_role_definitions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: Option<&str>,
    api_version: &str,
) -> Result<Vec<RoleDefinition>, RoleDefinitionError> {
    let url = scope_url(base_url, scope.unwrap_or(""), ROLE_DEFINITIONS_PATH);
    let filter = format!("type eq '{}'", CUSTOM_ROLE_TYPE);

    let builder = authorize(client.get(&url), auth_token)
        .query(&[("$filter", filter.as_str()), ("api-version", api_version)]);
    let response = send_request(builder, ROLE_DEFINITIONS_PATH, "GET").await?;

    let resp: RoleDefinitionListResponse = read_json(response).await?;
    if resp.next_link.is_some() {
        debug!(
            count = resp.value.len(),
            "Role definition listing has more pages; only the first is returned"
        );
    }

    Ok(resp.value)
}

/// Create a custom role under a freshly generated id.
pub async fn create_role_definition(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: &str,
    params: &RoleDefinitionParams,
    api_version: &str,
) -> Result<RoleDefinition, RoleDefinitionError> {
    let role_definition_id = Uuid::new_v4().to_string();

    let response = put_role_definition(
        client,
        base_url,
        auth_token,
        scope,
        &role_definition_id,
        params,
        api_version,
    )
    .await?;

    read_optional_json::<RoleDefinition>(response)
        .await?
        .ok_or_else(|| {
            RoleDefinitionError::Unexpected(format!(
                "empty response creating role definition {}",
                role_definition_id
            ))
        })
}

/// Replace an existing role definition.
///
/// This overwrites the whole definition: lists left empty in `params` are
/// stored as empty.
pub async fn update_role_definition(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: &str,
    role_definition_id: &str,
    params: &RoleDefinitionParams,
    api_version: &str,
) -> Result<RoleUpdateConfirmation, RoleDefinitionError> {
    put_role_definition(
        client,
        base_url,
        auth_token,
        scope,
        role_definition_id,
        params,
        api_version,
    )
    .await?;

    Ok(RoleUpdateConfirmation::new(role_definition_id))
}

/// Delete a role definition by id.
///
/// Returns the deleted definition when the service sends it back, `None`
/// when the body is empty (e.g. `204 No Content`).
pub async fn delete_role_definition(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: &str,
    role_definition_id: &str,
    api_version: &str,
) -> Result<Option<serde_json::Value>, RoleDefinitionError> {
    let scope = require_scope(scope)?;
    let encoded_id = require_path_segment(role_definition_id, "role definition id")?;
    let path = format!("{}/{}", ROLE_DEFINITIONS_PATH, encoded_id);
    let url = scope_url(base_url, scope, &path);

    let builder =
        authorize(client.delete(&url), auth_token).query(&[("api-version", api_version)]);
    let response = send_request(builder, &path, "DELETE").await?;

    Ok(read_optional_json(response).await?)
}

async fn put_role_definition(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    scope: &str,
    role_definition_id: &str,
    params: &RoleDefinitionParams,
    api_version: &str,
) -> Result<Response, RequestError> {
    let scope = require_scope(scope)?;
    let encoded_id = require_path_segment(role_definition_id, "role definition id")?;
    let path = format!("{}/{}", ROLE_DEFINITIONS_PATH, encoded_id);
    let url = scope_url(base_url, scope, &path);

    let builder = authorize(client.put(&url), auth_token)
        .query(&[("api-version", api_version)])
        .json(&params.to_request_body(role_definition_id));

    send_request(builder, &path, "PUT").await
}
