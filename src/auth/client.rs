//! Authentication Service REST Client
//!
//! HTTP client for the clinic's credential verification endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::{CredentialVerifier, VerifyError, VerifyRequest, VerifyResponse};

/// Configuration for the authentication client
#[derive(Debug, Clone)]
pub struct AuthClientConfig {
    /// Base URL for the authentication service (e.g., "http://localhost:8090")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// Verifies credentials with `POST {base_url}/v1/auth/verify`
pub struct HttpCredentialVerifier {
    client: Client,
    config: AuthClientConfig,
}

impl HttpCredentialVerifier {
    /// Create a new client with the given configuration
    pub fn new(config: AuthClientConfig) -> Result<Self, VerifyError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| VerifyError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AuthClientConfig {
        &self.config
    }

    fn verify_url(&self) -> String {
        format!(
            "{}/v1/auth/verify",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait(?Send)]
impl CredentialVerifier for HttpCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, VerifyError> {
        let body = VerifyRequest { username, password };

        let response = self
            .client
            .post(self.verify_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VerifyError::Timeout
                } else if e.is_connect() {
                    VerifyError::Unavailable
                } else {
                    VerifyError::Request(e.to_string())
                }
            })?;

        match response.status() {
            status if status.is_success() => {
                let result: VerifyResponse = response
                    .json()
                    .await
                    .map_err(|e| VerifyError::Request(e.to_string()))?;
                Ok(result.valid)
            }
            // The service may answer a rejected pair with 401/403 instead of `valid: false`
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            status => {
                let text = response.text().await.unwrap_or_default();
                Err(VerifyError::ApiError {
                    status: status.as_u16(),
                    message: text,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with `status_line` and a JSON `body`
    async fn serve_once(status_line: &'static str, body: &'static str) -> AuthClientConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            // Drain the whole request so closing the socket does not reset it
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => n,
                };
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        AuthClientConfig {
            base_url: format!("http://{}", addr),
            request_timeout_ms: 2000,
        }
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    async fn verify_against(status_line: &'static str, body: &'static str) -> Result<bool, VerifyError> {
        let verifier = HttpCredentialVerifier::new(serve_once(status_line, body).await).unwrap();
        verifier.verify("sterlingdentalclinic", "rootcanal").await
    }

    #[tokio::test]
    async fn test_success_body_decides() {
        assert!(verify_against("200 OK", r#"{"valid": true}"#).await.unwrap());
        assert!(!verify_against("200 OK", r#"{"valid": false}"#).await.unwrap());
    }

    #[tokio::test]
    async fn test_unauthorized_and_forbidden_mean_rejected() {
        assert!(!verify_against("401 Unauthorized", r#"{"error": "bad credentials"}"#)
            .await
            .unwrap());
        assert!(!verify_against("403 Forbidden", "{}").await.unwrap());
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let result = verify_against("500 Internal Server Error", r#"{"error": "boom"}"#).await;
        match result {
            Err(VerifyError::ApiError { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_request_error() {
        let result = verify_against("200 OK", r#"{"ok": 1}"#).await;
        assert!(matches!(result, Err(VerifyError::Request(_))));
    }

    #[test]
    fn test_default_config() {
        let config = AuthClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8090");
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn test_verify_url_strips_trailing_slash() {
        let verifier = HttpCredentialVerifier::new(AuthClientConfig {
            base_url: "https://auth.sterling.example/".to_string(),
            request_timeout_ms: 1000,
        })
        .unwrap();

        assert_eq!(
            verifier.verify_url(),
            "https://auth.sterling.example/v1/auth/verify"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // Port 9 (discard) on localhost is essentially never listening
        let verifier = HttpCredentialVerifier::new(AuthClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 500,
        })
        .unwrap();

        let result = verifier.verify("frontdesk", "pw").await;
        assert!(result.is_err());
    }
}
