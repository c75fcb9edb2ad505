//! Error types for the Azure REST client.
//!
//! Every request funnels its failures through [`RequestError`], which keeps
//! the original cause (transport error, HTTP status, decode error). Each
//! component then exposes its own error enum so callers can tell which
//! client failed without losing that cause.

use thiserror::Error;

/// Failure of a single HTTP round trip against Azure Resource Manager.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    Api {
        status: u16,
        url: String,
        code: Option<String>,
        message: String,
        request_id: Option<String>,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RequestError {
    /// HTTP status code carried by this error, if the service responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// ARM error code (e.g. `RoleDefinitionDoesNotExist`), if the body carried one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure happened while decoding the body.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Whether the failure happened before any response arrived.
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// Errors raised by the role definition client.
#[derive(Error, Debug)]
pub enum RoleDefinitionError {
    /// The request could not be built, sent, or was rejected by the service.
    #[error("Error during request: {0}")]
    Transport(#[source] RequestError),

    /// The response body could not be decoded.
    #[error("Error decoding JSON response: {0}")]
    Decode(#[source] RequestError),

    /// Anything else, e.g. a success status without the expected body.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the role assignment client.
#[derive(Error, Debug)]
pub enum RoleAssignmentError {
    /// The request could not be built, sent, or was rejected by the service.
    #[error("Error during request: {0}")]
    Transport(#[source] RequestError),

    /// The response body could not be decoded.
    #[error("Error decoding JSON response: {0}")]
    Decode(#[source] RequestError),

    /// Anything else, e.g. a success status without the expected body.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the metrics client.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// The request could not be built, sent, or was rejected by the service.
    #[error("Error during request: {0}")]
    Transport(#[source] RequestError),

    /// The response body could not be decoded.
    #[error("Error decoding JSON response: {0}")]
    Decode(#[source] RequestError),

    /// Neither `hours` nor `days` was supplied.
    #[error("Missing time window: supply either hours or days")]
    MissingTimeWindow,

    /// Both `hours` and `days` were supplied.
    #[error("Conflicting time window: supply either hours or days, not both")]
    ConflictingTimeWindow,

    /// The window is empty or does not fit in a timestamp.
    #[error("Invalid time window: {0}")]
    InvalidTimeWindow(String),

    /// No metric names were given.
    #[error("At least one metric name is required")]
    MissingMetricNames,

    /// The response decoded but lacks a field the summary needs.
    #[error("Metrics response is missing {0}")]
    MissingField(&'static str),

    /// Anything else.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

macro_rules! request_error_conversions {
    ($($ty:ident),+ $(,)?) => {$(
        impl From<RequestError> for $ty {
            fn from(err: RequestError) -> Self {
                if err.is_decode() {
                    Self::Decode(err)
                } else {
                    Self::Transport(err)
                }
            }
        }

        impl $ty {
            /// HTTP status code of the failed request, if the service responded.
            pub fn status(&self) -> Option<u16> {
                self.request_error().and_then(RequestError::status)
            }

            /// The underlying request failure, if there was one.
            pub fn request_error(&self) -> Option<&RequestError> {
                match self {
                    Self::Transport(e) | Self::Decode(e) => Some(e),
                    _ => None,
                }
            }
        }
    )+};
}

request_error_conversions!(RoleDefinitionError, RoleAssignmentError, MetricsError);
