//! Application State
//!
//! One explicit object owning the session, navigation and notice state of a
//! tab. Renderers read from it; nothing lives in module-level globals.

use chrono::{DateTime, Utc};
use std::rc::Rc;

use crate::navigation::{NavigationController, NavigationError, Section};
use crate::notice::{Notice, NoticeCenter, Severity};
use crate::session::{AuthError, LoginPrefill, Session, SessionManager, SessionStatus};

/// Which page the tab shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login(LoginPrefill),
    Dashboard,
}

/// Result of submitting the login form
#[derive(Debug)]
pub enum LoginOutcome {
    Success {
        session: Session,
        notice: Notice,
    },
    Failure {
        error: AuthError,
        notice: Notice,
        /// The form should empty and refocus the password field
        clear_password: bool,
    },
}

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Per-tab application state
pub struct AppState {
    /// Shared so a login can be awaited without borrowing the whole state
    pub session: Rc<SessionManager>,
    pub navigation: NavigationController,
    pub notices: NoticeCenter,
    route: Route,
}

impl AppState {
    pub fn new(
        session: impl Into<Rc<SessionManager>>,
        navigation: NavigationController,
        notices: NoticeCenter,
    ) -> Self {
        let session = session.into();
        let route = Route::Login(session.login_prefill());
        Self {
            session,
            navigation,
            notices,
            route,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Decide the first page on load
    ///
    /// A valid session skips the login form; otherwise the form opens
    /// pre-filled from the remembered user.
    pub fn boot(&mut self, now: DateTime<Utc>) -> &Route {
        self.route = match self.session.check_existing_session(now) {
            SessionStatus::Valid(_) => {
                self.navigation.load_initial();
                Route::Dashboard
            }
            SessionStatus::Expired | SessionStatus::None => {
                Route::Login(self.session.login_prefill())
            }
        };
        tracing::debug!(route = ?self.route, "Booted");
        &self.route
    }

    /// Bounce to the login form if the session ran out while the page was open
    pub fn ensure_session(&mut self, now: DateTime<Utc>) -> &Route {
        if self.route == Route::Dashboard && !self.session.check_existing_session(now).is_valid() {
            tracing::info!("Session no longer valid, returning to login");
            self.navigation.reset();
            self.route = Route::Login(self.session.login_prefill());
            self.notices.show(SESSION_EXPIRED_MESSAGE, Severity::Info);
        }
        &self.route
    }

    /// Run a login attempt and translate the outcome into a notice
    pub async fn submit_login(
        &mut self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> LoginOutcome {
        let session = self.begin_login();
        let result = session.attempt_login(username, password, remember_me).await;
        self.finish_login(result)
    }

    /// First half of [`submit_login`](Self::submit_login) for callers that
    /// cannot hold `&mut self` across the attempt
    ///
    /// Hides the current notice and hands out the session manager to run
    /// `attempt_login` on.
    pub fn begin_login(&mut self) -> Rc<SessionManager> {
        self.notices.clear();
        Rc::clone(&self.session)
    }

    /// Second half of [`submit_login`](Self::submit_login)
    pub fn finish_login(&mut self, result: Result<Session, AuthError>) -> LoginOutcome {
        match result {
            Ok(session) => {
                let notice = self.notices.show(LOGIN_SUCCESS_MESSAGE, Severity::Success);
                self.route = Route::Dashboard;
                self.navigation.load_initial();
                LoginOutcome::Success { session, notice }
            }
            Err(error) => {
                let notice = self.notices.show(error.user_message(), Severity::Error);
                let clear_password = matches!(error, AuthError::InvalidCredentials);
                LoginOutcome::Failure {
                    error,
                    notice,
                    clear_password,
                }
            }
        }
    }

    /// Sign out and go back to the login form
    pub fn logout(&mut self) -> Result<&Route, AuthError> {
        self.session.logout()?;
        self.navigation.reset();
        self.route = Route::Login(self.session.login_prefill());
        Ok(&self.route)
    }

    /// Hide whatever notice is up, as typing into the login form does
    pub fn clear_notice(&mut self) {
        self.notices.clear();
    }

    /// Switch dashboard section by identifier
    ///
    /// Unknown identifiers surface an error notice and change nothing.
    pub fn show_section(&mut self, id: &str) -> Result<Section, NavigationError> {
        self.navigation.navigate_to_id(id).map_err(|e| {
            self.notices.show(e.to_string(), Severity::Error);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CredentialVerifier, VerifyError};
    use crate::clock::{Clock, ManualClock};
    use crate::navigation::SectionLoader;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct OnePair;

    #[async_trait(?Send)]
    impl CredentialVerifier for OnePair {
        async fn verify(&self, username: &str, password: &str) -> Result<bool, VerifyError> {
            Ok(username == "sterlingdentalclinic" && password == "rootcanal")
        }
    }

    #[derive(Default)]
    struct RecordingLoader {
        loaded: RefCell<Vec<Section>>,
    }

    impl SectionLoader for RecordingLoader {
        fn load(&self, section: Section) {
            self.loaded.borrow_mut().push(section);
        }
    }

    struct Fixture {
        durable: Rc<MemoryStore>,
        clock: Rc<ManualClock>,
        loader: Rc<RecordingLoader>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                durable: Rc::new(MemoryStore::new()),
                clock: Rc::new(ManualClock::new(
                    Utc.with_ymd_and_hms(2025, 9, 1, 7, 45, 0).unwrap(),
                )),
                loader: Rc::new(RecordingLoader::default()),
            }
        }

        /// A fresh tab sharing durable storage with earlier ones
        fn tab(&self, tab_store: Rc<MemoryStore>) -> AppState {
            let session =
                SessionManager::new(tab_store, self.durable.clone(), Rc::new(OnePair), self.clock.clone());
            AppState::new(
                session,
                NavigationController::new(self.loader.clone()),
                NoticeCenter::default(),
            )
        }
    }

    #[tokio::test]
    async fn test_full_login_flow() {
        let fx = Fixture::new();
        let tab = Rc::new(MemoryStore::new());
        let mut app = fx.tab(tab.clone());

        assert!(matches!(app.boot(fx.clock.now()), Route::Login(_)));

        let outcome = app.submit_login("sterlingdentalclinic", "rootcanal", true).await;
        match outcome {
            LoginOutcome::Success { notice, .. } => {
                assert_eq!(notice.message, LOGIN_SUCCESS_MESSAGE);
                assert_eq!(notice.severity, Severity::Success);
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(app.route(), &Route::Dashboard);
        assert_eq!(*fx.loader.loaded.borrow(), vec![Section::Dashboard]);

        // Same tab reloads: session still valid
        let mut reloaded = fx.tab(tab);
        assert_eq!(reloaded.boot(fx.clock.now()), &Route::Dashboard);
    }

    #[tokio::test]
    async fn test_failed_login_asks_to_clear_password() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));

        match app.submit_login("sterlingdentalclinic", "molar", false).await {
            LoginOutcome::Failure {
                error,
                notice,
                clear_password,
            } => {
                assert!(matches!(error, AuthError::InvalidCredentials));
                assert_eq!(notice.message, "Invalid username or password");
                assert!(clear_password);
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(matches!(app.route(), Route::Login(_)));
    }

    #[tokio::test]
    async fn test_missing_fields_keep_password() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));

        match app.submit_login("", "rootcanal", false).await {
            LoginOutcome::Failure { clear_password, notice, .. } => {
                assert!(!clear_password);
                assert_eq!(notice.message, "Please enter both username and password");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_editing_login_form_hides_error() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));

        let notice = match app.submit_login("sterlingdentalclinic", "molar", false).await {
            LoginOutcome::Failure { notice, .. } => notice,
            other => panic!("expected failure, got {:?}", other),
        };
        assert_eq!(app.notices.current(), Some(&notice));

        app.clear_notice();
        assert!(app.notices.current().is_none());
        // The pending auto-dismiss no longer has anything to hide
        assert!(!app.notices.dismiss(notice.id));
        assert!(matches!(app.route(), Route::Login(_)));
    }

    #[tokio::test]
    async fn test_restart_prefills_remembered_user() {
        let fx = Fixture::new();
        let mut first = fx.tab(Rc::new(MemoryStore::new()));
        first
            .submit_login("sterlingdentalclinic", "rootcanal", true)
            .await;

        let mut second = fx.tab(Rc::new(MemoryStore::new()));
        match second.boot(fx.clock.now()) {
            Route::Login(prefill) => {
                assert_eq!(prefill.username, "sterlingdentalclinic");
                assert!(prefill.remember_me);
                assert_eq!(prefill.focus, crate::session::FocusField::Password);
            }
            Route::Dashboard => panic!("fresh tab must not be authenticated"),
        }
    }

    #[tokio::test]
    async fn test_session_expiry_returns_to_login() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));
        app.submit_login("sterlingdentalclinic", "rootcanal", false).await;
        app.navigation.navigate_to(Section::Billing);

        fx.clock.advance(chrono::Duration::hours(24));

        assert!(matches!(app.ensure_session(fx.clock.now()), Route::Login(_)));
        assert_eq!(app.navigation.active(), Section::Dashboard);
        let notice = app.notices.current().unwrap();
        assert_eq!(notice.message, SESSION_EXPIRED_MESSAGE);
        assert_eq!(notice.severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_ensure_session_is_quiet_while_valid() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));
        app.submit_login("sterlingdentalclinic", "rootcanal", false).await;
        app.notices.clear();

        fx.clock.advance(chrono::Duration::hours(23));

        assert_eq!(app.ensure_session(fx.clock.now()), &Route::Dashboard);
        assert!(app.notices.current().is_none());
    }

    #[tokio::test]
    async fn test_split_login_matches_submit_login() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));
        app.notices.show("stale", Severity::Error);

        let session = app.begin_login();
        assert!(app.notices.current().is_none());

        let result = session.attempt_login("sterlingdentalclinic", "rootcanal", false).await;
        let outcome = app.finish_login(result);

        assert!(matches!(outcome, LoginOutcome::Success { .. }));
        assert_eq!(app.route(), &Route::Dashboard);
        assert_eq!(*fx.loader.loaded.borrow(), vec![Section::Dashboard]);
    }

    #[tokio::test]
    async fn test_logout() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));
        app.submit_login("sterlingdentalclinic", "rootcanal", true).await;

        let route = app.logout().unwrap().clone();

        assert!(matches!(route, Route::Login(ref p) if p.username == "sterlingdentalclinic"));
        assert_eq!(
            app.session.check_existing_session(fx.clock.now()),
            SessionStatus::None
        );
    }

    #[test]
    fn test_unknown_section_raises_notice() {
        let fx = Fixture::new();
        let mut app = fx.tab(Rc::new(MemoryStore::new()));

        assert!(app.show_section("xrays").is_err());
        assert_eq!(app.navigation.active(), Section::Dashboard);
        assert_eq!(
            app.notices.current().map(|n| n.message.clone()),
            Some("Unknown section: xrays".to_string())
        );

        assert_eq!(app.show_section("patients").unwrap(), Section::Patients);
    }
}
