//! Shared request plumbing for ARM endpoints.
//!
//! Every endpoint builds its request through [`authorize`], sends it with
//! [`send_request`] and decodes the body with [`read_json`] or
//! [`read_optional_json`]. Nothing here retries: one call is one round trip.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::RequestError;

/// Header ARM uses to correlate a request with its server-side logs.
const REQUEST_ID_HEADER: &str = "x-ms-request-id";

/// ARM error envelope: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ArmErrorResponse {
    error: ArmErrorBody,
}

#[derive(Debug, Deserialize)]
struct ArmErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Attach the bearer token and JSON content type.
pub fn authorize(builder: RequestBuilder, auth_token: &str) -> RequestBuilder {
    builder
        .header(AUTHORIZATION, format!("Bearer {}", auth_token))
        .header(CONTENT_TYPE, "application/json")
}

/// Send a request and turn any non-2xx status into [`RequestError::Api`].
///
/// `endpoint` and `method` are only used for logging; the token is never logged.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response, RequestError> {
    debug!(method, endpoint, "Sending ARM request");

    let response = builder.send().await?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (code, message) = match serde_json::from_str::<ArmErrorResponse>(&body) {
        Ok(parsed) => (
            parsed.error.code,
            parsed.error.message.unwrap_or_else(|| body.clone()),
        ),
        Err(_) if body.trim().is_empty() => (
            None,
            status.canonical_reason().unwrap_or("no response body").to_string(),
        ),
        Err(_) => (None, body),
    };

    warn!(
        status = status.as_u16(),
        method,
        endpoint,
        code = code.as_deref().unwrap_or(""),
        "ARM request failed"
    );

    Err(RequestError::Api {
        status: status.as_u16(),
        url,
        code,
        message,
        request_id,
    })
}

/// Decode a JSON body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let url = response.url().to_string();
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| RequestError::Decode { url, source })
}

/// Decode a JSON body that the service may leave empty (e.g. `204 No Content`).
pub async fn read_optional_json<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, RequestError> {
    let url = response.url().to_string();
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&body)
        .map(Some)
        .map_err(|source| RequestError::Decode { url, source })
}
