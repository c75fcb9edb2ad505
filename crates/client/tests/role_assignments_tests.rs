//! Role assignment endpoint tests.
//!
//! # Invariants
//! - A bare role definition GUID is qualified with the scope
//! - Each assignment is created under a freshly generated id

mod common;

use azure_rest_client::error::RoleAssignmentError;
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path_regex, query_param};

const ROLE_ID: &str = "7b266cd7-0bba-4ae2-8423-90ede5e1e898";
const PRINCIPAL_ID: &str = "aa11bb22-cc33-dd44-ee55-ff6677889900";

#[tokio::test]
async fn test_assign_role() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("role_assignments/create.json");

    Mock::given(method("PUT"))
        .and(path_regex(
            r"^/subscriptions/00000000-0000-0000-0000-000000000001/providers/Microsoft\.Authorization/roleAssignments/[0-9a-f-]{36}$",
        ))
        .and(query_param("api-version", "2022-04-01"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "properties": {
                "roleDefinitionId": format!(
                    "{}/providers/Microsoft.Authorization/roleDefinitions/{}",
                    SCOPE, ROLE_ID
                ),
                "principalId": PRINCIPAL_ID
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let assignment = client
        .assign_role(&test_credential(), SCOPE, ROLE_ID, PRINCIPAL_ID)
        .await
        .unwrap();

    assert_eq!(assignment.properties.principal_id, PRINCIPAL_ID);
    assert!(assignment.properties.role_definition_id.ends_with(ROLE_ID));
    assert_eq!(assignment.properties.principal_type.as_deref(), Some("User"));
}

#[tokio::test]
async fn test_assign_role_with_qualified_definition_id() {
    let mock_server = MockServer::start().await;
    let qualified = format!(
        "/subscriptions/other/providers/Microsoft.Authorization/roleDefinitions/{}",
        ROLE_ID
    );

    Mock::given(method("PUT"))
        .and(body_json(json!({
            "properties": {
                "roleDefinitionId": qualified,
                "principalId": PRINCIPAL_ID
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("role_assignments/create.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .assign_role(&test_credential(), SCOPE, &qualified, PRINCIPAL_ID)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_assign_role_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": {
                "code": "RoleAssignmentExists",
                "message": "The role assignment already exists."
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .assign_role(&test_credential(), SCOPE, ROLE_ID, PRINCIPAL_ID)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(
        err.request_error().and_then(|e| e.code()),
        Some("RoleAssignmentExists")
    );
    assert!(matches!(err, RoleAssignmentError::Transport(_)));
}

#[tokio::test]
async fn test_assign_role_empty_body_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .assign_role(&test_credential(), SCOPE, ROLE_ID, PRINCIPAL_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, RoleAssignmentError::Unexpected(_)));
}

#[tokio::test]
async fn test_assign_role_rejects_empty_scope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .assign_role(&test_credential(), "/", ROLE_ID, PRINCIPAL_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, RoleAssignmentError::Transport(_)));
}
