//! Environment variable tests for the configuration loader.

use crate::ConfigError;
use crate::loader::ConfigLoader;
use crate::loader::env_var_or_none;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("AZURE_MANAGEMENT_URL", Some("https://management.usgovcloudapi.net")),
            ("AZURE_ACCESS_TOKEN", Some("env-token")),
            ("AZURE_REST_TIMEOUT", Some("45")),
            ("AZURE_ROLE_API_VERSION", Some("2022-05-01-preview")),
            ("AZURE_METRICS_API_VERSION", None),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(
                config.connection.base_url,
                "https://management.usgovcloudapi.net"
            );
            assert_eq!(config.auth.access_token.expose_secret(), "env-token");
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            assert_eq!(config.connection.role_api_version, "2022-05-01-preview");
            assert_eq!(config.connection.metrics_api_version, "2018-01-01");
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("AZURE_ACCESS_TOKEN", Some("env-token"))], || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_access_token("cli-token".to_string())
            .build()
            .unwrap();

        assert_eq!(config.auth.access_token.expose_secret(), "cli-token");
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("AZURE_ACCESS_TOKEN", Some("   "))], || {
        assert_eq!(env_var_or_none("AZURE_ACCESS_TOKEN"), None);

        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingToken)));
    });
}

#[test]
#[serial]
fn test_env_value_is_trimmed() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("AZURE_ACCESS_TOKEN", Some("  padded  "))], || {
        assert_eq!(
            env_var_or_none("AZURE_ACCESS_TOKEN"),
            Some("padded".to_string())
        );
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("AZURE_REST_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "AZURE_REST_TIMEOUT"),
            other => panic!("expected InvalidValue, got {:?}", other.err()),
        }
    });
}
