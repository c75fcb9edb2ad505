//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client error variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use azure_rest_client::{MetricsError, RequestError, RoleAssignmentError, RoleDefinitionError};

/// Structured exit codes for azure-rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - missing, invalid or expired token.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - role definition, scope or resource.
    NotFound = 4,

    /// Validation error - bad parameters or an unreadable response.
    ValidationError = 5,

    /// Permission denied - the principal lacks the required action.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&RequestError> for ExitCode {
    fn from(err: &RequestError) -> Self {
        match err {
            RequestError::Api { status, .. } => match status {
                400 => ExitCode::ValidationError,
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                429 => ExitCode::RateLimited,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },
            RequestError::Decode { .. } => ExitCode::ValidationError,
            RequestError::InvalidUrl(_) => ExitCode::ValidationError,
            RequestError::Http(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
        }
    }
}

impl From<&RoleDefinitionError> for ExitCode {
    fn from(err: &RoleDefinitionError) -> Self {
        err.request_error()
            .map(Self::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

impl From<&RoleAssignmentError> for ExitCode {
    fn from(err: &RoleAssignmentError) -> Self {
        err.request_error()
            .map(Self::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

impl From<&MetricsError> for ExitCode {
    fn from(err: &MetricsError) -> Self {
        match err {
            MetricsError::MissingTimeWindow
            | MetricsError::ConflictingTimeWindow
            | MetricsError::InvalidTimeWindow(_)
            | MetricsError::MissingMetricNames
            | MetricsError::MissingField(_) => ExitCode::ValidationError,
            MetricsError::Unexpected(_) => ExitCode::GeneralError,
            MetricsError::Transport(e) | MetricsError::Decode(e) => Self::from(e),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no client error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(e) = cause.downcast_ref::<RoleDefinitionError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<RoleAssignmentError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<MetricsError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<RequestError>() {
                return ExitCode::from(e);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn api_error(status: u16) -> RequestError {
        RequestError::Api {
            status,
            url: "https://management.azure.com/x".to_string(),
            code: None,
            message: "boom".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(429)), ExitCode::RateLimited);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_component_errors_use_request_error() {
        let err = RoleDefinitionError::from(api_error(404));
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);

        let err = RoleAssignmentError::Unexpected("empty".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_invalid_url_is_validation_error() {
        let err = RequestError::InvalidUrl("scope must not be empty".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        let err = RoleDefinitionError::from(RequestError::InvalidUrl("bad id".to_string()));
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_metrics_validation_errors() {
        assert_eq!(
            ExitCode::from(&MetricsError::MissingTimeWindow),
            ExitCode::ValidationError
        );
        assert_eq!(
            ExitCode::from(&MetricsError::ConflictingTimeWindow),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), MetricsError> = Err(MetricsError::from(api_error(403)));
        let err = result.context("Failed to fetch metrics").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::PermissionDenied);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
