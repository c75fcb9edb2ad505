//! Custom role definition methods for [`AzureClient`].
//!
//! # What this module handles:
//! - Listing custom role definitions
//! - Creating custom roles under a fresh id
//! - Replacing existing roles
//! - Deleting roles
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use crate::auth::Credential;
use crate::client::AzureClient;
use crate::endpoints;
use crate::error::RoleDefinitionError;
use crate::models::{RoleDefinition, RoleDefinitionParams, RoleUpdateConfirmation};

impl AzureClient {
    /// List custom role definitions at `scope`, or in the token's
    /// subscription context when `scope` is `None`.
    pub async fn list_role_definitions(
        &self,
        credential: &Credential,
        scope: Option<&str>,
    ) -> Result<Vec<RoleDefinition>, RoleDefinitionError> {
        endpoints::list_role_definitions(
            &self.http,
            &self.base_url,
            credential.expose(),
            scope,
            &self.role_api_version,
        )
        .await
    }

    /// Create a custom role. A new role definition id is generated per call.
    pub async fn create_role_definition(
        &self,
        credential: &Credential,
        scope: &str,
        params: &RoleDefinitionParams,
    ) -> Result<RoleDefinition, RoleDefinitionError> {
        endpoints::create_role_definition(
            &self.http,
            &self.base_url,
            credential.expose(),
            scope,
            params,
            &self.role_api_version,
        )
        .await
    }

    /// Replace the role definition with id `role_definition_id`.
    ///
    /// This is not a patch: pass the full set of actions and scopes, since
    /// anything omitted is cleared.
    pub async fn update_role_definition(
        &self,
        credential: &Credential,
        scope: &str,
        role_definition_id: &str,
        params: &RoleDefinitionParams,
    ) -> Result<RoleUpdateConfirmation, RoleDefinitionError> {
        endpoints::update_role_definition(
            &self.http,
            &self.base_url,
            credential.expose(),
            scope,
            role_definition_id,
            params,
            &self.role_api_version,
        )
        .await
    }

    /// Delete a role definition, returning the service's payload if any.
    pub async fn delete_role_definition(
        &self,
        credential: &Credential,
        scope: &str,
        role_definition_id: &str,
    ) -> Result<Option<serde_json::Value>, RoleDefinitionError> {
        endpoints::delete_role_definition(
            &self.http,
            &self.base_url,
            credential.expose(),
            scope,
            role_definition_id,
            &self.role_api_version,
        )
        .await
    }
}
