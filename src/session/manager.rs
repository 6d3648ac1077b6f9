//! Session Manager
//!
//! Owns the authenticated/unauthenticated state of one tab and the
//! "remember me" preference that outlives it.
//!
//! ```text
//! Unauthenticated --attempt_login ok--> Authenticated --expiry/logout--> Unauthenticated
//! ```
//!
//! `Authenticated` is re-entered on every page load for which
//! [`SessionManager::check_existing_session`] reports `Valid`.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;

use super::error::AuthError;
use super::loading::{LoadingGuard, LoadingIndicator, NoopIndicator};
use super::types::{keys, LoginPrefill, RememberedUser, Session, SessionPolicy, SessionStatus};
use crate::auth::CredentialVerifier;
use crate::clock::Clock;
use crate::storage::KeyValueStore;

/// Session state for one browser tab
pub struct SessionManager {
    tab: Rc<dyn KeyValueStore>,
    durable: Rc<dyn KeyValueStore>,
    verifier: Rc<dyn CredentialVerifier>,
    clock: Rc<dyn Clock>,
    loading: Rc<dyn LoadingIndicator>,
    policy: SessionPolicy,
    pending: Cell<bool>,
}

impl SessionManager {
    /// Create a manager over the given tab and durable stores
    pub fn new(
        tab: Rc<dyn KeyValueStore>,
        durable: Rc<dyn KeyValueStore>,
        verifier: Rc<dyn CredentialVerifier>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            tab,
            durable,
            verifier,
            clock,
            loading: Rc::new(NoopIndicator),
            policy: SessionPolicy::default(),
            pending: Cell::new(false),
        }
    }

    /// Builder method: set session timing
    pub fn with_policy(mut self, policy: SessionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: observe the loading state
    pub fn with_loading_indicator(mut self, indicator: Rc<dyn LoadingIndicator>) -> Self {
        self.loading = indicator;
        self
    }

    pub fn policy(&self) -> &SessionPolicy {
        &self.policy
    }

    /// Whether a login attempt is currently suspended
    pub fn is_loading(&self) -> bool {
        self.pending.get()
    }

    /// Try to sign in
    ///
    /// Empty fields fail immediately without entering the loading state.
    /// Otherwise the loading state is held across the simulated round-trip
    /// and the verifier call, and released on every exit path.
    pub async fn attempt_login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Session, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if self.pending.get() {
            tracing::debug!(username, "Login attempt rejected, another one is pending");
            return Err(AuthError::LoginInProgress);
        }

        let _loading = LoadingGuard::enter(self.loading.as_ref(), &self.pending);
        tracing::info!(username, remember_me, "Attempting login");

        self.clock.sleep(self.policy.login_delay).await;

        let valid = self
            .verifier
            .verify(username, password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential verification failed");
                AuthError::Internal(e.to_string())
            })?;

        if !valid {
            tracing::warn!(username, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        // Session record goes last: any earlier failure leaves the tab signed out
        if remember_me {
            self.durable.set(keys::REMEMBER_USER, "true")?;
            self.durable.set(keys::USERNAME, username)?;
        } else {
            self.forget_user()?;
        }

        let session = Session::new(self.clock.now());
        if let Err(e) = self.store_session(&session) {
            self.clear_session_quietly();
            return Err(e);
        }

        tracing::info!(username, login_time = %session.login_time, "Login successful");
        Ok(session)
    }

    /// Look for a session recorded earlier in this tab
    ///
    /// An expired (or unreadable) record is removed, so the next call
    /// reports `None`.
    pub fn check_existing_session(&self, now: DateTime<Utc>) -> SessionStatus {
        let session = match self.read_session() {
            Ok(Some(session)) => session,
            Ok(None) => return SessionStatus::None,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session record");
                self.clear_session_quietly();
                return SessionStatus::None;
            }
        };

        if session.is_valid_at(now, self.policy.ttl) {
            SessionStatus::Valid(session)
        } else {
            tracing::info!(login_time = %session.login_time, "Session expired");
            self.clear_session_quietly();
            SessionStatus::Expired
        }
    }

    /// Username remembered from an earlier login, if any
    pub fn load_remembered_user(&self) -> Option<RememberedUser> {
        let enabled = self.durable.get(keys::REMEMBER_USER).ok().flatten();
        let username = self.durable.get(keys::USERNAME).ok().flatten();

        match (enabled.as_deref(), username) {
            (Some("true"), Some(username)) if !username.is_empty() => Some(RememberedUser {
                enabled: true,
                username,
            }),
            _ => None,
        }
    }

    /// Initial login form state derived from the remembered user
    pub fn login_prefill(&self) -> LoginPrefill {
        LoginPrefill::from_remembered(self.load_remembered_user().as_ref())
    }

    /// End the session in this tab; the remembered user is kept
    pub fn logout(&self) -> Result<(), AuthError> {
        self.tab.remove(keys::AUTHENTICATED)?;
        self.tab.remove(keys::LOGIN_TIME)?;
        tracing::info!("Logged out");
        Ok(())
    }

    fn store_session(&self, session: &Session) -> Result<(), AuthError> {
        self.tab.set(keys::AUTHENTICATED, "true")?;
        self.tab
            .set(keys::LOGIN_TIME, &session.login_time.timestamp_millis().to_string())?;
        Ok(())
    }

    /// `Ok(None)` when nothing is recorded, `Err` when the record is malformed
    fn read_session(&self) -> Result<Option<Session>, AuthError> {
        let authenticated = self.tab.get(keys::AUTHENTICATED)?;
        let login_time = self.tab.get(keys::LOGIN_TIME)?;

        let (authenticated, login_time) = match (authenticated, login_time) {
            (Some(a), Some(t)) => (a, t),
            (None, None) => return Ok(None),
            _ => return Err(AuthError::Internal("incomplete session record".into())),
        };

        if authenticated != "true" {
            return Ok(None);
        }

        let millis: i64 = login_time
            .trim()
            .parse()
            .map_err(|_| AuthError::Internal(format!("invalid login time {login_time:?}")))?;
        let login_time = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| AuthError::Internal(format!("login time out of range: {millis}")))?;

        Ok(Some(Session::new(login_time)))
    }

    fn clear_session_quietly(&self) {
        if let Err(e) = self.logout() {
            tracing::warn!(error = %e, "Failed to clear session record");
        }
    }

    fn forget_user(&self) -> Result<(), AuthError> {
        self.durable.remove(keys::REMEMBER_USER)?;
        self.durable.remove(keys::USERNAME)?;
        Ok(())
    }
}
