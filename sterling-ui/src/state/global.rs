//! Global Application State
//!
//! Reactive state management using Leptos signals. The session, navigation
//! and notice rules live in one `sterling::AppState`; the signals here
//! mirror it for rendering.

use chrono::Utc;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use sterling::dashboard::Theme;
use sterling::notice::NoticeDurations;
use sterling::session::{LoadingIndicator, LoginPrefill};
use sterling::{
    AppState, LoginOutcome, NavigationController, NavigationError, Notice, NoticeCenter, Route,
    Section, SectionLoader, SessionManager, Severity,
};

use crate::api::GlooCredentialVerifier;
use crate::state::clock::BrowserClock;
use crate::state::storage::WebStorage;

/// How often an open dashboard re-checks session expiry
pub const SESSION_CHECK_INTERVAL_MS: u32 = 60_000;

/// Global application state provided to all components
///
/// Borrows of `app` never outlive a method call; the login attempt itself
/// runs on the shared session handle.
#[derive(Clone)]
pub struct GlobalState {
    app: Rc<RefCell<AppState>>,
    /// Whether the dashboard (rather than the login form) is showing
    pub authenticated: RwSignal<bool>,
    /// Section highlighted in the sidebar
    pub active_section: RwSignal<Section>,
    /// Toast on screen
    pub notice: RwSignal<Option<Notice>>,
    /// Login button spinner
    pub loading: RwSignal<bool>,
    pub theme: RwSignal<Theme>,
}

/// Mirrors the session manager's loading transitions into a signal
struct SignalIndicator(RwSignal<bool>);

impl LoadingIndicator for SignalIndicator {
    fn set_loading(&self, loading: bool) {
        self.0.set(loading);
    }
}

/// Section data loads, logged to the browser console
struct ConsoleLoader;

impl SectionLoader for ConsoleLoader {
    fn load(&self, section: Section) {
        web_sys::console::log_1(&format!("Loading {}...", section.id()).into());
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let loading = create_rw_signal(false);

    let session = SessionManager::new(
        Rc::new(WebStorage::session()),
        Rc::new(WebStorage::local()),
        Rc::new(GlooCredentialVerifier::from_storage()),
        Rc::new(BrowserClock),
    )
    .with_loading_indicator(Rc::new(SignalIndicator(loading)));

    let mut app = AppState::new(
        session,
        NavigationController::new(Rc::new(ConsoleLoader)),
        NoticeCenter::new(NoticeDurations::default()),
    );
    let authenticated = *app.boot(Utc::now()) == Route::Dashboard;

    let state = GlobalState {
        app: Rc::new(RefCell::new(app)),
        authenticated: create_rw_signal(authenticated),
        active_section: create_rw_signal(Section::Dashboard),
        notice: create_rw_signal(None),
        loading,
        theme: create_rw_signal(Theme::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Initial login form contents
    pub fn login_prefill(&self) -> LoginPrefill {
        self.app.borrow().session.login_prefill()
    }

    /// Run a login attempt and raise the matching toast
    ///
    /// The dashboard is not shown yet; call [`enter_dashboard`](Self::enter_dashboard)
    /// once the success toast has been seen.
    pub async fn submit_login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> LoginOutcome {
        let session = self.app.borrow_mut().begin_login();
        self.notice.set(None);

        let result = session.attempt_login(username, password, remember_me).await;
        let outcome = self.app.borrow_mut().finish_login(result);

        let notice = match &outcome {
            LoginOutcome::Success { notice, .. } | LoginOutcome::Failure { notice, .. } => {
                notice.clone()
            }
        };
        self.present(notice);
        outcome
    }

    /// Swap the login form for the dashboard
    pub fn enter_dashboard(&self) {
        let (route, active) = {
            let app = self.app.borrow();
            (app.route().clone(), app.navigation.active())
        };
        self.active_section.set(active);
        self.authenticated.set(route == Route::Dashboard);
    }

    /// Bounce to the login form once the session has run out
    pub fn ensure_session(&self) {
        if !self.authenticated.get_untracked() {
            return;
        }

        let expired = {
            let mut app = self.app.borrow_mut();
            let still_valid = *app.ensure_session(Utc::now()) == Route::Dashboard;
            (!still_valid).then(|| app.notices.current().cloned())
        };

        if let Some(notice) = expired {
            self.active_section.set(Section::Dashboard);
            self.authenticated.set(false);
            if let Some(notice) = notice {
                self.present(notice);
            }
        }
    }

    pub fn logout(&self) {
        let result = self.app.borrow_mut().logout().map(|_| ());
        match result {
            Ok(()) => {
                self.active_section.set(Section::Dashboard);
                self.authenticated.set(false);
            }
            Err(e) => self.show_error(&e.to_string()),
        }
    }

    pub fn navigate_to(&self, section: Section) {
        self.app.borrow_mut().navigation.navigate_to(section);
        self.active_section.set(section);
    }

    /// Navigate by identifier; unknown identifiers only raise a toast
    pub fn navigate_to_id(&self, id: &str) -> Result<Section, NavigationError> {
        let (result, notice) = {
            let mut app = self.app.borrow_mut();
            let result = app.show_section(id);
            (result, app.notices.current().cloned())
        };

        match &result {
            Ok(section) => self.active_section.set(*section),
            Err(_) => {
                if let Some(notice) = notice {
                    self.present(notice);
                }
            }
        }
        result
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggle());
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.show(message, Severity::Error);
    }

    /// Show an info message (auto-clears after timeout)
    pub fn show_info(&self, message: &str) {
        self.show(message, Severity::Info);
    }

    fn show(&self, message: &str, severity: Severity) {
        let notice = self.app.borrow_mut().notices.show(message, severity);
        self.present(notice);
    }

    /// Put `notice` on screen and arm its dismissal
    fn present(&self, notice: Notice) {
        let id = notice.id;
        let millis = u32::try_from(notice.duration.as_millis()).unwrap_or(u32::MAX);
        self.notice.set(Some(notice));

        // A newer notice makes this dismissal a no-op
        let app = self.app.clone();
        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(millis, move || {
            if app.borrow_mut().notices.dismiss(id) {
                notice_signal.set(None);
            }
        })
        .forget();
    }

    /// Hide the current toast
    pub fn clear_notice(&self) {
        self.app.borrow_mut().clear_notice();
        self.notice.set(None);
    }
}
