//! Credential Verification
//!
//! The dashboard never decides on its own whether a username/password pair
//! is valid. It asks a [`CredentialVerifier`], which in production is the
//! clinic's authentication service reached over HTTP.

#[cfg(feature = "native")]
pub mod client;

#[cfg(feature = "native")]
pub use client::{AuthClientConfig, HttpCredentialVerifier};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External credential check
///
/// `Ok(false)` means the service answered and rejected the pair; `Err` means
/// no answer could be obtained.
#[async_trait(?Send)]
pub trait CredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, VerifyError>;
}

/// Request body sent to the authentication service
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response body returned by the authentication service
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Errors that can occur when talking to the authentication service
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Authentication service unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Client setup failed: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let body = VerifyRequest {
            username: "frontdesk",
            password: "pw",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["username"], "frontdesk");
        assert_eq!(json["password"], "pw");
    }

    #[test]
    fn test_response_deserialization() {
        let resp: VerifyResponse = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(resp.valid);
    }

    #[test]
    fn test_error_display() {
        let err = VerifyError::ApiError {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: maintenance");
    }
}
