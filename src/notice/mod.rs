//! Transient Notices
//!
//! Toast-style messages that dismiss themselves after a few seconds.
//!
//! Each shown notice gets a fresh [`NoticeId`]. A dismissal only hides the
//! notice it was scheduled for, so an old timer firing late can never hide
//! a newer message.

#[cfg(feature = "native")]
pub mod scheduler;

#[cfg(feature = "native")]
pub use scheduler::NoticeScheduler;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a notice is styled and how long it stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Font Awesome icon for the toast
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
            Severity::Info => "fa-info-circle",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Token identifying one displayed notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoticeId(pub u64);

/// A notice currently (or formerly) on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
    /// Time until the notice dismisses itself
    pub duration: Duration,
}

/// Auto-dismiss delay per severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDurations {
    pub info: Duration,
    pub success: Duration,
    pub error: Duration,
}

impl Default for NoticeDurations {
    fn default() -> Self {
        Self {
            info: Duration::from_millis(5000),
            success: Duration::from_millis(3000),
            error: Duration::from_millis(5000),
        }
    }
}

impl NoticeDurations {
    pub fn for_severity(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Error => self.error,
        }
    }
}

/// Registry of the single displayed notice
#[derive(Debug, Default)]
pub struct NoticeCenter {
    next_id: u64,
    current: Option<Notice>,
    durations: NoticeDurations,
}

impl NoticeCenter {
    pub fn new(durations: NoticeDurations) -> Self {
        Self {
            next_id: 0,
            current: None,
            durations,
        }
    }

    /// Display `message`, replacing whatever was shown
    ///
    /// The returned notice carries the token its dismissal must present.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> Notice {
        self.next_id += 1;
        let notice = Notice {
            id: NoticeId(self.next_id),
            message: message.into(),
            severity,
            duration: self.durations.for_severity(severity),
        };

        tracing::debug!(notice_id = notice.id.0, severity = %severity, "Showing notice");
        self.current = Some(notice.clone());
        notice
    }

    /// Hide the notice `id` if it is still the one displayed
    ///
    /// Returns `false` for a stale token.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Hide whatever is displayed (e.g. the user started typing)
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn durations(&self) -> &NoticeDurations {
        &self.durations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_assigns_fresh_ids_and_durations() {
        let mut center = NoticeCenter::default();
        let a = center.show("Invalid username or password", Severity::Error);
        let b = center.show("Login successful! Redirecting...", Severity::Success);

        assert_ne!(a.id, b.id);
        assert_eq!(a.duration, Duration::from_millis(5000));
        assert_eq!(b.duration, Duration::from_millis(3000));
        assert_eq!(center.current(), Some(&b));
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_notice() {
        let mut center = NoticeCenter::default();
        let first = center.show("first", Severity::Error);
        let second = center.show("second", Severity::Error);

        assert!(!center.dismiss(first.id));
        assert_eq!(center.current().map(|n| n.message.as_str()), Some("second"));

        assert!(center.dismiss(second.id));
        assert!(center.current().is_none());
        assert!(!center.dismiss(second.id));
    }

    #[test]
    fn test_clear() {
        let mut center = NoticeCenter::default();
        center.show("hello", Severity::Info);
        center.clear();
        assert!(center.current().is_none());
    }

    #[test]
    fn test_custom_durations() {
        let mut center = NoticeCenter::new(NoticeDurations {
            info: Duration::from_secs(1),
            success: Duration::from_secs(2),
            error: Duration::from_secs(3),
        });
        assert_eq!(center.show("x", Severity::Info).duration, Duration::from_secs(1));
        assert_eq!(center.durations().error, Duration::from_secs(3));
    }
}
