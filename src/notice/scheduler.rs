//! Auto-dismiss timers on tokio
//!
//! Showing a notice spawns a task that sleeps for the notice's duration and
//! then dismisses it by token. The previous pending task is aborted.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

use super::{Notice, NoticeCenter, NoticeDurations, Severity};

/// Notice center with self-dismissing notices
pub struct NoticeScheduler {
    center: Arc<Mutex<NoticeCenter>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl NoticeScheduler {
    pub fn new(durations: NoticeDurations) -> Self {
        Self {
            center: Arc::new(Mutex::new(NoticeCenter::new(durations))),
            pending: Mutex::new(None),
        }
    }

    /// Display a notice and schedule its dismissal
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Notice {
        let notice = lock(&self.center).show(message, severity);

        let center = Arc::clone(&self.center);
        let id = notice.id;
        let duration = notice.duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if lock(&center).dismiss(id) {
                tracing::debug!(notice_id = id.0, "Notice dismissed");
            }
        });

        if let Some(previous) = lock(&self.pending).replace(handle) {
            previous.abort();
        }

        notice
    }

    /// Snapshot of the displayed notice
    pub fn current(&self) -> Option<Notice> {
        lock(&self.center).current().cloned()
    }

    /// Hide the displayed notice and cancel its timer
    pub fn clear(&self) {
        if let Some(previous) = lock(&self.pending).take() {
            previous.abort();
        }
        lock(&self.center).clear();
    }
}

impl Drop for NoticeScheduler {
    fn drop(&mut self) {
        if let Some(pending) = lock(&self.pending).take() {
            pending.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking dismissal task cannot leave the registry half-updated
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_notice_dismisses_itself() {
        let scheduler = NoticeScheduler::new(NoticeDurations::default());
        scheduler.show("Sample patient added successfully!", Severity::Success);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert!(scheduler.current().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(scheduler.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_old_timer_does_not_hide_newer_notice() {
        let scheduler = NoticeScheduler::new(NoticeDurations::default());
        scheduler.show("Invalid username or password", Severity::Error);

        tokio::time::sleep(Duration::from_secs(3)).await;
        scheduler.show("Please enter both username and password", Severity::Error);

        // First notice's 5s deadline passes here
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(
            scheduler.current().map(|n| n.message),
            Some("Please enter both username and password".to_string())
        );

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(scheduler.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_timer() {
        let scheduler = NoticeScheduler::new(NoticeDurations::default());
        scheduler.show("hello", Severity::Info);
        scheduler.clear();
        assert!(scheduler.current().is_none());

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(scheduler.current().is_none());
    }
}
