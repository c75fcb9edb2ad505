//! Bearer token handling.

use secrecy::{ExposeSecret, SecretString};

/// Caller-supplied bearer token.
///
/// The client never acquires or refreshes tokens; every call takes the
/// credential to use. The inner value is a [`SecretString`], so `Debug`
/// output never reveals it.
#[derive(Debug, Clone)]
pub struct Credential {
    token: SecretString,
}

impl Credential {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into().into()),
        }
    }

    /// Raw token, for building the `Authorization` header.
    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl From<SecretString> for Credential {
    fn from(token: SecretString) -> Self {
        Self { token }
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}
