//! Authentication error types

use thiserror::Error;

use crate::storage::StoreError;

/// Errors surfaced by the session manager
///
/// All of them are recoverable at the UI boundary: each maps to a transient
/// notice via [`AuthError::user_message`].
#[derive(Error, Debug)]
pub enum AuthError {
    /// Username or password left empty
    #[error("missing username or password")]
    MissingFields,

    /// The credential service rejected the pair
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Anything unexpected during the attempt (service down, storage failure)
    #[error("internal error: {0}")]
    Internal(String),

    /// A stored session outlived its lifetime
    #[error("session expired")]
    SessionExpired,

    /// A login attempt is already pending
    #[error("login already in progress")]
    LoginInProgress,
}

impl AuthError {
    /// Message shown to the user in the login form
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::MissingFields => "Please enter both username and password",
            AuthError::InvalidCredentials => "Invalid username or password",
            AuthError::Internal(_) => "An error occurred during login. Please try again.",
            AuthError::SessionExpired => "Your session has expired. Please sign in again.",
            AuthError::LoginInProgress => "Signing in, please wait...",
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
