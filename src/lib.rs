//! # Sterling
//!
//! Core state for the Sterling Dental Clinic dashboard: who is signed in,
//! which section is on screen, and which notice is showing.
//!
//! ## Features
//!
//! - **Sessions**: login with a pluggable credential service, 24 hour expiry,
//!   "remember me" across restarts
//! - **Navigation**: one active section at a time, with a data-load hook
//! - **Notices**: self-dismissing toasts that never hide a newer message
//! - **Dashboard data**: stat cards, revenue series, calendar grid
//!
//! ## Modules
//!
//! - [`session`]: login state machine
//! - [`navigation`]: section controller
//! - [`notice`]: notice registry and timers
//! - [`storage`]: key-value stores standing in for Web Storage
//! - [`app`]: the per-tab state object tying them together
//!
//! With `default-features = false` the crate builds for `wasm32` and is
//! driven by the `sterling-ui` Leptos front end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use sterling::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let verifier = HttpCredentialVerifier::new(config.auth.client_config())?;
//!
//!     let session = SessionManager::new(
//!         Rc::new(MemoryStore::new()),
//!         Rc::new(FileStore::open(config.storage.durable_path())?),
//!         Rc::new(verifier),
//!         Rc::new(SystemClock),
//!     )
//!     .with_policy(config.session.policy());
//!
//!     let mut app = AppState::new(
//!         session,
//!         NavigationController::new(Rc::new(TracingLoader)),
//!         NoticeCenter::new(config.notices.durations()),
//!     );
//!
//!     if let Route::Login(prefill) = app.boot(SystemClock.now()) {
//!         println!("Please sign in (username: {:?})", prefill.username);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod auth;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod navigation;
pub mod notice;
pub mod session;
pub mod storage;

// Re-export top-level types for convenience
pub use app::{AppState, LoginOutcome, Route};
pub use auth::{CredentialVerifier, VerifyError};
pub use clock::{Clock, ManualClock};
pub use config::{Config, ConfigError};
pub use navigation::{NavigationController, NavigationError, Section, SectionLoader};
pub use notice::{Notice, NoticeCenter, NoticeId, Severity};
pub use session::{
    AuthError, LoginPrefill, RememberedUser, Session, SessionManager, SessionStatus,
};
pub use storage::{KeyValueStore, MemoryStore, StoreError};

/// Everything needed to wire up a dashboard tab
pub mod prelude {
    pub use crate::app::{AppState, LoginOutcome, Route};
    pub use crate::auth::CredentialVerifier;
    #[cfg(feature = "native")]
    pub use crate::auth::{AuthClientConfig, HttpCredentialVerifier};
    pub use crate::clock::Clock;
    #[cfg(feature = "native")]
    pub use crate::clock::SystemClock;
    pub use crate::config::Config;
    pub use crate::navigation::{NavigationController, Section, SectionLoader, TracingLoader};
    pub use crate::notice::{NoticeCenter, Severity};
    pub use crate::session::{SessionManager, SessionStatus};
    #[cfg(feature = "native")]
    pub use crate::storage::FileStore;
    pub use crate::storage::{KeyValueStore, MemoryStore};
}
