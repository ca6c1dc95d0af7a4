//! Patient authentication
//!
//! There is no identity backend. The only shipped [`Authenticator`] accepts
//! every submission and reports it as [`AuthOutcome::Unverified`], logging a
//! warning each time so the missing credential check never goes unnoticed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Identity backend unreachable
    #[error("Authentication backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Login form submission
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address or national id ("cédula")
    pub identifier: String,
    /// Password
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

/// Result of a successful authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthOutcome {
    /// Credentials were checked against an identity provider
    Verified,
    /// Access granted without any credential check
    Unverified,
}

/// Seam for credential validation
pub trait Authenticator {
    /// Validate a login submission
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome>;
}

/// Grants access to any submission, including empty fields.
///
/// Stands in for a real identity provider; it never returns an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllAuthenticator;

impl Authenticator for AcceptAllAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome> {
        tracing::warn!(
            identifier = %credentials.identifier,
            "credential validation not implemented, granting access"
        );
        Ok(AuthOutcome::Unverified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all_grants_empty_credentials() {
        let outcome = AcceptAllAuthenticator
            .authenticate(&Credentials::default())
            .unwrap();
        assert_eq!(outcome, AuthOutcome::Unverified);
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("maria@example.com", "s3cret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("maria@example.com"));
        assert!(!debug.contains("s3cret"));
    }
}
