//! Error path secret protection tests.
//!
//! This module verifies that bearer tokens are not exposed in error
//! messages or debug output when network or API errors occur.
//!
//! What this module does NOT handle:
//! - Error classification (see the per-client test files)

use azure_rest_client::models::RoleDefinitionParams;
use azure_rest_client::{AzureClient, Credential};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method},
};

const SECRET: &str = "secret-bearer-token-xyz789";
const SCOPE: &str = "/subscriptions/00000000-0000-0000-0000-000000000001";

#[tokio::test]
async fn test_network_error_does_not_expose_token() {
    let client = AzureClient::builder()
        .base_url("http://localhost:1".to_string())
        .timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();

    let result = client
        .list_role_definitions(&Credential::new(SECRET), Some(SCOPE))
        .await;

    let err = result.unwrap_err();
    assert!(
        !format!("{:?}", err).contains(SECRET),
        "Debug output should not contain the token"
    );
    assert!(!err.to_string().contains(SECRET));
    assert!(err.request_error().is_some_and(|e| e.is_connection()));
}

#[tokio::test]
async fn test_unauthorized_error_does_not_expose_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(header("authorization", format!("Bearer {}", SECRET).as_str()))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "code": "InvalidAuthenticationToken",
                "message": "The access token is invalid."
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AzureClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    let params = RoleDefinitionParams::new("r", "d");
    let err = client
        .create_role_definition(&Credential::new(SECRET), SCOPE, &params)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(!format!("{:?}", err).contains(SECRET));
    assert!(!err.to_string().contains(SECRET));
}

#[test]
fn test_credential_debug_is_redacted() {
    let credential = Credential::new(SECRET);
    assert!(!format!("{:?}", credential).contains(SECRET));
}
