use shared_types::{AppError, LoginForm, Role, User};

use crate::accounts;
use crate::store::SessionStore;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials or role selection";

/// The signed-in user, mirrored to a [`SessionStore`] under one key.
///
/// The in-memory user is authoritative once set. Storage failures are logged
/// and never surface as errors to the page.
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    key: String,
    user: Option<User>,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            user: None,
        }
    }

    /// Boot check: load a previously saved user. A record that does not parse
    /// is removed and the session stays signed out.
    pub fn restore(&mut self) -> Option<&User> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no saved session");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read saved session");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = user.role.as_str(), "restored session");
                self.user = Some(user);
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding corrupted session record");
                if let Err(e) = self.store.remove(&self.key) {
                    tracing::warn!(key = %self.key, error = %e, "failed to clear corrupted session");
                }
                self.user = None;
            }
        }
        self.user.as_ref()
    }

    /// Boot check against a freshly loaded store. A user who signed in before
    /// the load finished wins over whatever the store held; the store is only
    /// adopted while signed out.
    pub fn restore_from(&mut self, store: S) -> Option<&User> {
        if let Some(user) = &self.user {
            tracing::debug!(user_id = %user.id, "signed in before restore, keeping session");
            return self.user.as_ref();
        }
        self.store = store;
        self.restore()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// True iff the (email, role) pair names a demo account and the password
    /// matches. On success the user is kept in memory and written to the store.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> bool {
        let Some(user) = accounts::authenticate(email, password, role) else {
            tracing::info!(email, role = role.as_str(), "login rejected");
            return false;
        };

        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.write(&self.key, &json) {
                    tracing::warn!(key = %self.key, error = %e, "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
        tracing::info!(user_id = %user.id, role = role.as_str(), "login succeeded");
        self.user = Some(user);
        true
    }

    /// Form-level login: blank fields and bad credentials become an [`AppError`].
    pub fn sign_in(&mut self, form: &LoginForm) -> Result<(), AppError> {
        form.check()?;
        let role = form
            .selected_role()
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;
        if self.login(&form.email, &form.password, role) {
            Ok(())
        } else {
            Err(AppError::unauthorized(INVALID_CREDENTIALS))
        }
    }

    /// Clears the user from memory and from the store.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "logout");
        }
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to clear saved session");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::DEMO_PASSWORD;
    use crate::store::{MemoryStore, StoreError};

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new(), "user")
    }

    #[test]
    fn starts_signed_out() {
        let mut s = session();
        assert!(s.restore().is_none());
        assert!(!s.is_authenticated());
        assert_eq!(s.role(), None);
    }

    #[test]
    fn login_mirrors_user_to_store() {
        let mut s = session();
        assert!(s.login("admin@auction.com", DEMO_PASSWORD, Role::SuperAdmin));
        assert_eq!(s.role(), Some(Role::SuperAdmin));
        let raw = s.store().read("user").unwrap().unwrap();
        let saved: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(Some(&saved), s.current_user());
    }

    #[test]
    fn failed_login_leaves_state_untouched() {
        let mut s = session();
        assert!(!s.login("admin@auction.com", "wrong", Role::SuperAdmin));
        assert!(!s.login("admin@auction.com", DEMO_PASSWORD, Role::PawnshopOwner));
        assert!(!s.is_authenticated());
        assert!(s.store().is_empty());
    }

    #[test]
    fn logout_clears_memory_and_store() {
        let mut s = session();
        assert!(s.login("pawnshop@auction.com", DEMO_PASSWORD, Role::PawnshopOwner));
        s.logout();
        assert!(s.current_user().is_none());
        assert!(s.store().is_empty());
    }

    #[test]
    fn restore_reads_saved_record() {
        let raw = r#"{"id":"2","email":"pawnshop@auction.com","name":"Pawnshop Owner","role":"pawnshop_owner"}"#;
        let mut s = Session::new(MemoryStore::with_entry("user", raw), "user");
        let user = s.restore().unwrap();
        assert_eq!(user.role, Role::PawnshopOwner);
    }

    #[test]
    fn corrupted_record_is_removed() {
        let mut s = Session::new(MemoryStore::with_entry("user", "{not json"), "user");
        assert!(s.restore().is_none());
        assert!(s.store().is_empty());

        let bad_role = r#"{"id":"3","email":"x@y.z","name":"X","role":"root"}"#;
        let mut s = Session::new(MemoryStore::with_entry("user", bad_role), "user");
        assert!(s.restore().is_none());
        assert!(s.store().is_empty());
    }

    #[test]
    fn sign_in_maps_errors() {
        let mut s = session();
        let blank = LoginForm::new();
        let err = s.sign_in(&blank).unwrap_err();
        assert_eq!(err.message, "Please fill in all required fields");

        let wrong = LoginForm {
            email: "admin@auction.com".into(),
            password: "nope".into(),
            ..LoginForm::new()
        };
        let err = s.sign_in(&wrong).unwrap_err();
        assert_eq!(err.message, INVALID_CREDENTIALS);

        let ok = LoginForm {
            password: DEMO_PASSWORD.into(),
            ..wrong
        };
        assert!(s.sign_in(&ok).is_ok());
    }

    #[test]
    fn restore_from_adopts_store_when_signed_out() {
        let raw = r#"{"id":"1","email":"admin@auction.com","name":"Super Admin","role":"super_admin"}"#;
        let mut s = session();
        let user = s.restore_from(MemoryStore::with_entry("user", raw)).unwrap();
        assert_eq!(user.role, Role::SuperAdmin);
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn restore_from_keeps_login_made_during_boot() {
        let mut s = session();
        assert!(s.login("pawnshop@auction.com", DEMO_PASSWORD, Role::PawnshopOwner));

        // snapshot taken before the login: still holds an older visitor
        let stale = r#"{"id":"1","email":"admin@auction.com","name":"Super Admin","role":"super_admin"}"#;
        let user = s.restore_from(MemoryStore::with_entry("user", stale)).unwrap();
        assert_eq!(user.role, Role::PawnshopOwner);

        let raw = s.store().read("user").unwrap().unwrap();
        assert!(raw.contains("pawnshop@auction.com"));

        // an empty snapshot must not sign the user out either
        assert!(s.restore_from(MemoryStore::new()).is_some());
        assert!(s.is_authenticated());
    }

    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }
        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn storage_failures_do_not_block_login() {
        let mut s = Session::new(ReadOnlyStore, "user");
        assert!(s.login("admin@auction.com", DEMO_PASSWORD, Role::SuperAdmin));
        assert!(s.is_authenticated());
        s.logout();
        assert!(!s.is_authenticated());
    }
}
