use dioxus::prelude::*;
use session::Session;
use shared_types::{evaluate, Access, AccessDecision, AppError, LoginForm, Role, User};

use crate::browser_store::BrowserStore;
use crate::config::app_config;
use crate::delay::sleep_ms;

/// Global authentication state.
///
/// `checking` stays true until the saved session has been read back from
/// local storage; guards render a spinner meanwhile.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Session<BrowserStore>>,
    pub checking: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        let key = app_config().session.storage_key.clone();
        Self {
            session: Signal::new(Session::new(BrowserStore::default(), key)),
            checking: Signal::new(true),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().current_user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn is_checking(&self) -> bool {
        *self.checking.read()
    }

    pub fn decide(&self, required: &Access) -> AccessDecision {
        evaluate(self.session.read().current_user(), required)
    }

    /// Restores the saved user from local storage. A login that completed
    /// while the storage read was in flight is kept.
    pub async fn restore(mut self) {
        let key = app_config().session.storage_key.clone();
        let store = BrowserStore::load(&key).await;
        self.session.write().restore_from(store);
        self.checking.set(false);
    }

    /// Simulated round trip, then the credential check.
    pub async fn login(mut self, form: LoginForm) -> Result<(), AppError> {
        sleep_ms(app_config().session.login_delay_ms).await;
        self.session.write().sign_in(&form)
    }

    pub fn logout(mut self) {
        self.session.write().logout();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
