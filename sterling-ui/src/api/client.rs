//! HTTP API Client
//!
//! Browser-side credential check against the clinic's authentication
//! service.

use async_trait::async_trait;
use gloo_net::http::Request;

use sterling::auth::{CredentialVerifier, VerifyError, VerifyRequest, VerifyResponse};

/// Default authentication service URL
pub const DEFAULT_AUTH_BASE: &str = "http://localhost:8090";

const AUTH_URL_KEY: &str = "sterling_auth_url";

/// Get the auth service URL from local storage or use default
pub fn get_auth_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(AUTH_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_AUTH_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Asks the authentication service over `fetch`
#[derive(Debug, Clone)]
pub struct GlooCredentialVerifier {
    base_url: String,
}

impl GlooCredentialVerifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Verifier pointed at the URL saved in local storage
    pub fn from_storage() -> Self {
        Self::new(get_auth_base())
    }

    pub fn verify_url(&self) -> String {
        format!("{}/v1/auth/verify", self.base_url)
    }
}

#[async_trait(?Send)]
impl CredentialVerifier for GlooCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, VerifyError> {
        let response = Request::post(&self.verify_url())
            .json(&VerifyRequest { username, password })
            .map_err(|e| VerifyError::Request(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| VerifyError::Request(format!("Network error: {}", e)))?;

        match response.status() {
            401 | 403 => return Ok(false),
            503 => return Err(VerifyError::Unavailable),
            _ => {}
        }

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ApiError>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VerifyError::ApiError { status, message });
        }

        let result: VerifyResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Request(format!("Parse error: {}", e)))?;
        Ok(result.valid)
    }
}
