//! Session Management
//!
//! Client-side authentication state for the dashboard:
//!
//! - **types**: `Session`, `RememberedUser`, `SessionStatus`, storage keys
//! - **manager**: login, session checks, remember-me, logout
//! - **loading**: spinner state held across a login attempt
//! - **error**: `AuthError` and its user-facing messages
//!
//! # Example
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use sterling::auth::{AuthClientConfig, HttpCredentialVerifier};
//! use sterling::clock::{Clock, SystemClock};
//! use sterling::session::{SessionManager, SessionStatus};
//! use sterling::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let verifier = HttpCredentialVerifier::new(AuthClientConfig::default())?;
//!     let manager = SessionManager::new(
//!         Rc::new(MemoryStore::new()),
//!         Rc::new(MemoryStore::new()),
//!         Rc::new(verifier),
//!         Rc::new(SystemClock),
//!     );
//!
//!     manager.attempt_login("frontdesk", "secret", true).await?;
//!     assert!(matches!(
//!         manager.check_existing_session(SystemClock.now()),
//!         SessionStatus::Valid(_)
//!     ));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loading;
pub mod manager;
pub mod types;

pub use error::AuthError;
pub use loading::{LoadingFlag, LoadingIndicator, NoopIndicator};
pub use manager::SessionManager;
pub use types::{
    keys, FocusField, LoginPrefill, RememberedUser, Session, SessionPolicy, SessionStatus,
};
