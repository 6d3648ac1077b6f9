//! Loading indicator plumbing
//!
//! The login button shows a spinner while credentials are being checked.
//! The session manager drives it through [`LoadingIndicator`] and a guard
//! that always switches it off again.

use std::cell::Cell;

/// Receives loading on/off transitions
pub trait LoadingIndicator {
    fn set_loading(&self, loading: bool);
}

/// Plain flag, for callers that poll instead of render
#[derive(Debug, Default)]
pub struct LoadingFlag {
    loading: Cell<bool>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }
}

impl LoadingIndicator for LoadingFlag {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

/// Indicator that ignores every transition
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIndicator;

impl LoadingIndicator for NoopIndicator {
    fn set_loading(&self, _loading: bool) {}
}

/// Holds the indicator on for as long as it lives
pub(crate) struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
    pending: &'a Cell<bool>,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn enter(indicator: &'a dyn LoadingIndicator, pending: &'a Cell<bool>) -> Self {
        pending.set(true);
        indicator.set_loading(true);
        Self { indicator, pending }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.pending.set(false);
        self.indicator.set_loading(false);
    }
}
