// ============================================================================
// SESSION STATE - authentication state machine
// ============================================================================
// Owns the signed-in user and the bearer token. Persistence and navigation
// are injected seams so the machine is testable without a browser: the
// token lives in a cookie, the user snapshot in localStorage (see
// state/browser.rs).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;
use crate::utils::constants::{ROUTE_DASHBOARD, ROUTE_HOME, ROUTE_LOGIN};

/// Persisted credential storage: token (cookie) + user snapshot (localStorage)
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<(), String>;
    fn clear_token(&self);
    fn user_snapshot(&self) -> Option<String>;
    fn set_user_snapshot(&self, json: &str) -> Result<(), String>;
    fn clear_user_snapshot(&self);
}

/// Fire-and-forget client-side navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone)]
pub struct SessionService {
    user: Rc<RefCell<Option<User>>>,
    token: Rc<RefCell<Option<String>>>,
    is_loading: Rc<RefCell<bool>>,
    store: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigator>,
    on_change: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl SessionService {
    pub fn new(store: Rc<dyn CredentialStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
            // true only until the rehydration pass completes
            is_loading: Rc::new(RefCell::new(true)),
            store,
            navigator,
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_on_change(&self, f: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(f));
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.is_loading.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Runs once at startup. A present token and a parseable snapshot
    /// restore the session; a present-but-corrupted snapshot purges both
    /// credentials; anything missing is simply "not logged in" and the
    /// store is left alone. Always ends with `is_loading == false`.
    pub fn rehydrate(&self) {
        match (self.store.token(), self.store.user_snapshot()) {
            (Some(token), Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    log::info!("🔑 Session restored for {}", user.display_name());
                    *self.user.borrow_mut() = Some(user);
                    *self.token.borrow_mut() = Some(token);
                }
                Err(e) => {
                    log::warn!("🧹 Corrupted session snapshot, purging credentials: {}", e);
                    self.store.clear_token();
                    self.store.clear_user_snapshot();
                }
            },
            _ => {}
        }
        *self.is_loading.borrow_mut() = false;
        self.notify();
    }

    /// Caller passes an already-validated user/token pair (from a
    /// successful backend login). Storage failures are soft: the in-memory
    /// session stays logged in for the rest of this page load.
    pub fn login(&self, user: User, token: &str) {
        *self.user.borrow_mut() = Some(user.clone());
        *self.token.borrow_mut() = Some(token.to_string());

        if let Err(e) = self.store.set_token(token) {
            log::warn!("⚠️ Could not persist session token: {}", e);
        }
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.set_user_snapshot(&json) {
                    log::warn!("⚠️ Could not persist user snapshot: {}", e);
                }
            }
            Err(e) => log::warn!("⚠️ Could not serialize user snapshot: {}", e),
        }
        self.notify();
    }

    /// Idempotent: an already-anonymous session just navigates.
    pub fn logout(&self) {
        self.clear();
        self.navigator.navigate(ROUTE_HOME);
    }

    /// For 401-classified API failures only: drop the session and send the
    /// member to the login page. Generic network errors never come here.
    pub fn invalidate(&self) {
        self.clear();
        self.navigator.navigate(ROUTE_LOGIN);
    }

    fn clear(&self) {
        *self.user.borrow_mut() = None;
        *self.token.borrow_mut() = None;
        self.store.clear_token();
        self.store.clear_user_snapshot();
        self.notify();
    }

    fn notify(&self) {
        if let Some(f) = self.on_change.borrow().as_ref() {
            f();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Rehydration still running: render a loading indicator, nothing else
    Wait,
    Redirect(&'static str),
    Render,
}

/// Members-only routes: anonymous visitors go to the login page
pub fn members_only_decision(is_loading: bool, is_authenticated: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Wait
    } else if !is_authenticated {
        GuardDecision::Redirect(ROUTE_LOGIN)
    } else {
        GuardDecision::Render
    }
}

/// Auth pages (login / apply) when already signed in go to the dashboard
pub fn anonymous_only_decision(is_loading: bool, is_authenticated: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Wait
    } else if is_authenticated {
        GuardDecision::Redirect(ROUTE_DASHBOARD)
    } else {
        GuardDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use crate::models::{MemberStatus, UserRole};

    #[derive(Default)]
    struct MemoryStore {
        token: RefCell<Option<String>>,
        snapshot: RefCell<Option<String>>,
        writes: Cell<u32>,
        clears: Cell<u32>,
    }

    impl CredentialStore for MemoryStore {
        fn token(&self) -> Option<String> {
            self.token.borrow().clone()
        }
        fn set_token(&self, token: &str) -> Result<(), String> {
            self.writes.set(self.writes.get() + 1);
            *self.token.borrow_mut() = Some(token.to_string());
            Ok(())
        }
        fn clear_token(&self) {
            self.clears.set(self.clears.get() + 1);
            *self.token.borrow_mut() = None;
        }
        fn user_snapshot(&self) -> Option<String> {
            self.snapshot.borrow().clone()
        }
        fn set_user_snapshot(&self, json: &str) -> Result<(), String> {
            self.writes.set(self.writes.get() + 1);
            *self.snapshot.borrow_mut() = Some(json.to_string());
            Ok(())
        }
        fn clear_user_snapshot(&self) {
            self.clears.set(self.clears.get() + 1);
            *self.snapshot.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    fn some_user() -> User {
        User {
            id: "u-9".to_string(),
            role: UserRole::Member,
            email: Some("member@example.org".to_string()),
            full_name: Some("Dr A Member".to_string()),
            status: Some(MemberStatus::Active),
        }
    }

    fn service(store: &Rc<MemoryStore>, nav: &Rc<RecordingNavigator>) -> SessionService {
        SessionService::new(
            store.clone() as Rc<dyn CredentialStore>,
            nav.clone() as Rc<dyn Navigator>,
        )
    }

    #[test]
    fn rehydrate_with_empty_store_stays_anonymous_without_writes() {
        let store = Rc::new(MemoryStore::default());
        let nav = Rc::new(RecordingNavigator::default());
        let session = service(&store, &nav);

        assert!(session.is_loading());
        session.rehydrate();

        assert_eq!(session.user(), None);
        assert!(!session.is_loading());
        assert_eq!(store.writes.get(), 0);
        assert_eq!(store.clears.get(), 0, "a missing session is not corruption");
    }

    #[test]
    fn rehydrate_purges_on_corrupted_snapshot() {
        let store = Rc::new(MemoryStore::default());
        *store.token.borrow_mut() = Some("tok-1".to_string());
        *store.snapshot.borrow_mut() = Some("{not json".to_string());
        let nav = Rc::new(RecordingNavigator::default());
        let session = service(&store, &nav);

        session.rehydrate();

        assert_eq!(session.user(), None);
        assert!(!session.is_loading());
        assert!(store.token.borrow().is_none());
        assert!(store.snapshot.borrow().is_none());
    }

    #[test]
    fn login_survives_a_reload_and_logout_does_not() {
        let store = Rc::new(MemoryStore::default());
        let nav = Rc::new(RecordingNavigator::default());

        let session = service(&store, &nav);
        session.rehydrate();
        session.login(some_user(), "tok-7");
        assert_eq!(session.token().as_deref(), Some("tok-7"));

        // Simulated reload: fresh service over the same store
        let reloaded = service(&store, &nav);
        reloaded.rehydrate();
        assert_eq!(reloaded.user(), Some(some_user()));
        assert_eq!(reloaded.token().as_deref(), Some("tok-7"));

        reloaded.logout();
        assert_eq!(reloaded.user(), None);
        assert_eq!(nav.paths.borrow().last().map(String::as_str), Some(ROUTE_HOME));

        let after_logout = service(&store, &nav);
        after_logout.rehydrate();
        assert_eq!(after_logout.user(), None);
    }

    #[test]
    fn logout_when_anonymous_only_navigates() {
        let store = Rc::new(MemoryStore::default());
        let nav = Rc::new(RecordingNavigator::default());
        let session = service(&store, &nav);
        session.rehydrate();

        session.logout();
        assert_eq!(session.user(), None);
        assert_eq!(nav.paths.borrow().as_slice(), &[ROUTE_HOME.to_string()]);
    }

    #[test]
    fn invalidate_redirects_to_login() {
        let store = Rc::new(MemoryStore::default());
        let nav = Rc::new(RecordingNavigator::default());
        let session = service(&store, &nav);
        session.rehydrate();
        session.login(some_user(), "tok-7");

        session.invalidate();
        assert_eq!(session.user(), None);
        assert!(store.token.borrow().is_none());
        assert_eq!(nav.paths.borrow().last().map(String::as_str), Some(ROUTE_LOGIN));
    }

    #[test]
    fn members_only_guard_waits_then_redirects_anonymous_visitors() {
        // While rehydrating nothing protected may render
        assert_eq!(members_only_decision(true, false), GuardDecision::Wait);
        assert_eq!(members_only_decision(true, true), GuardDecision::Wait);
        // Resolved: anonymous goes to /login, members render
        assert_eq!(
            members_only_decision(false, false),
            GuardDecision::Redirect(ROUTE_LOGIN)
        );
        assert_eq!(members_only_decision(false, true), GuardDecision::Render);
    }

    #[test]
    fn anonymous_only_guard_sends_members_to_the_dashboard() {
        assert_eq!(anonymous_only_decision(true, true), GuardDecision::Wait);
        assert_eq!(
            anonymous_only_decision(false, true),
            GuardDecision::Redirect(ROUTE_DASHBOARD)
        );
        assert_eq!(anonymous_only_decision(false, false), GuardDecision::Render);
    }
}
