//! Integration tests for `azure-rest roles`.

mod common;

use azure_rest_client::testing::load_fixture;
use common::{SCOPE, azure_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROLE_DEFINITIONS_PATH: &str = "/subscriptions/00000000-0000-0000-0000-000000000001/providers/Microsoft.Authorization/roleDefinitions";

#[tokio::test]
async fn test_roles_list_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ROLE_DEFINITIONS_PATH))
        .and(query_param("$filter", "type eq 'CustomRole'"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("role_definitions/list.json")))
        .mount(&server)
        .await;

    azure_cmd_with_base_url(&server.uri())
        .args(["roles", "list", "--scope", SCOPE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Storage Reader Plus"))
        .stdout(predicate::str::contains("VM Operator"))
        .stdout(predicate::str::starts_with("NAME"));
}

#[tokio::test]
async fn test_roles_list_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ROLE_DEFINITIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("role_definitions/list.json")))
        .mount(&server)
        .await;

    let output = azure_cmd_with_base_url(&server.uri())
        .args(["--output", "json", "roles", "list", "--scope", SCOPE])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["properties"]["roleName"], "Storage Reader Plus");
}

#[tokio::test]
async fn test_roles_create() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path_regex(r"/roleDefinitions/[0-9a-f-]{36}$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("role_definitions/create.json")))
        .expect(1)
        .mount(&server)
        .await;

    azure_cmd_with_base_url(&server.uri())
        .args([
            "roles",
            "create",
            "--scope",
            SCOPE,
            "--name",
            "Blob Auditor",
            "--description",
            "Read blob containers",
            "--actions",
            "Microsoft.Storage/storageAccounts/blobServices/containers/read",
            "--assignable-scopes",
            SCOPE,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Role 'Blob Auditor' created"));
}

#[tokio::test]
async fn test_roles_update_prints_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/abc", ROLE_DEFINITIONS_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("role_definitions/create.json")))
        .expect(1)
        .mount(&server)
        .await;

    azure_cmd_with_base_url(&server.uri())
        .args([
            "roles",
            "update",
            "--scope",
            SCOPE,
            "--id",
            "abc",
            "--name",
            "Blob Auditor",
            "--description",
            "Read only",
        ])
        .assert()
        .success()
        .stdout("Role updated successfully\n");
}

#[tokio::test]
async fn test_roles_delete_not_found_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "code": "RoleDefinitionDoesNotExist",
                "message": "The specified role definition does not exist."
            }
        })))
        .mount(&server)
        .await;

    azure_cmd_with_base_url(&server.uri())
        .args(["roles", "delete", "--scope", SCOPE, "--id", "missing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}
