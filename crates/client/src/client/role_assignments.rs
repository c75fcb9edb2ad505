//! Role assignment methods for [`AzureClient`].

use crate::auth::Credential;
use crate::client::AzureClient;
use crate::endpoints;
use crate::error::RoleAssignmentError;
use crate::models::RoleAssignment;

impl AzureClient {
    /// Assign a role definition to a principal. A new assignment id is
    /// generated per call.
    pub async fn assign_role(
        &self,
        credential: &Credential,
        scope: &str,
        role_definition_id: &str,
        principal_id: &str,
    ) -> Result<RoleAssignment, RoleAssignmentError> {
        endpoints::assign_role(
            &self.http,
            &self.base_url,
            credential.expose(),
            scope,
            role_definition_id,
            principal_id,
            &self.role_api_version,
        )
        .await
    }
}
