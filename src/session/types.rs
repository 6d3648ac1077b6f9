//! Session data types
//!
//! - `Session`: tab-scoped proof of a successful login
//! - `RememberedUser`: durable username kept for the login form
//! - `SessionStatus`: outcome of checking for an existing session
//! - `LoginPrefill`: initial state of the login form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Storage keys shared with the browser build
pub mod keys {
    /// Tab storage: `"true"` while a session exists
    pub const AUTHENTICATED: &str = "sterling_authenticated";
    /// Tab storage: login time as epoch milliseconds
    pub const LOGIN_TIME: &str = "sterling_login_time";
    /// Durable storage: `"true"` when "remember me" was checked
    pub const REMEMBER_USER: &str = "sterling_remember_user";
    /// Durable storage: the remembered username
    pub const USERNAME: &str = "sterling_username";
}

/// A successful authentication in the current tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub login_time: DateTime<Utc>,
}

impl Session {
    pub fn new(login_time: DateTime<Utc>) -> Self {
        Self {
            authenticated: true,
            login_time,
        }
    }

    /// Whether the session is still usable at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        self.authenticated && now - self.login_time < ttl
    }

    /// When the session stops being valid
    ///
    /// `None` when `ttl` reaches past the representable range.
    pub fn expires_at(&self, ttl: chrono::Duration) -> Option<DateTime<Utc>> {
        self.login_time.checked_add_signed(ttl)
    }
}

/// Username remembered across browser restarts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedUser {
    pub enabled: bool,
    pub username: String,
}

/// Result of looking for a session on page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// A live session exists; skip the login form
    Valid(Session),
    /// A session existed but outlived its TTL; it has been cleared
    Expired,
    /// No session was ever recorded in this tab
    None,
}

impl SessionStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionStatus::Valid(_))
    }
}

/// Which login field receives focus when the form opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusField {
    Username,
    Password,
}

/// Initial state of the login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPrefill {
    pub username: String,
    pub remember_me: bool,
    pub focus: FocusField,
}

impl LoginPrefill {
    pub fn from_remembered(remembered: Option<&RememberedUser>) -> Self {
        match remembered {
            Some(user) if user.enabled && !user.username.is_empty() => Self {
                username: user.username.clone(),
                remember_me: true,
                focus: FocusField::Password,
            },
            _ => Self {
                username: String::new(),
                remember_me: false,
                focus: FocusField::Username,
            },
        }
    }
}

/// Timing rules for sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    /// How long a session stays valid after login
    pub ttl: chrono::Duration,
    /// Simulated round-trip before credentials are checked
    pub login_delay: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            ttl: chrono::Duration::hours(24),
            login_delay: Duration::from_millis(1500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_validity_boundary() {
        let login = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();
        let session = Session::new(login);
        let ttl = chrono::Duration::hours(24);

        assert!(session.is_valid_at(login, ttl));
        assert!(session.is_valid_at(login + ttl - chrono::Duration::milliseconds(1), ttl));
        assert!(!session.is_valid_at(login + ttl, ttl));
        assert_eq!(session.expires_at(ttl), Some(login + ttl));
    }

    #[test]
    fn test_unbounded_ttl_never_expires() {
        let login = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();
        let session = Session::new(login);

        assert_eq!(session.expires_at(chrono::Duration::MAX), None);
        assert!(session.is_valid_at(login + chrono::Duration::days(36500), chrono::Duration::MAX));
    }

    #[test]
    fn test_prefill_with_remembered_user() {
        let user = RememberedUser {
            enabled: true,
            username: "frontdesk".to_string(),
        };
        let prefill = LoginPrefill::from_remembered(Some(&user));
        assert_eq!(prefill.username, "frontdesk");
        assert!(prefill.remember_me);
        assert_eq!(prefill.focus, FocusField::Password);
    }

    #[test]
    fn test_prefill_without_remembered_user() {
        let prefill = LoginPrefill::from_remembered(None);
        assert_eq!(prefill.username, "");
        assert!(!prefill.remember_me);
        assert_eq!(prefill.focus, FocusField::Username);
    }

    #[test]
    fn test_default_policy() {
        let policy = SessionPolicy::default();
        assert_eq!(policy.ttl, chrono::Duration::hours(24));
        assert_eq!(policy.login_delay, Duration::from_millis(1500));
    }
}
