use std::path::Path;

use session::{mock_users, FileStore, Session, DEMO_PASSWORD};
use shared_types::{AppConfig, LoginForm, Role, User};

/// Storage key used by every test session, read from an empty config so the
/// defaults apply.
pub fn storage_key() -> String {
    AppConfig::from_toml_or_default("").session.storage_key
}

/// A fresh session over a file store rooted at `dir`. Two sessions built on
/// the same directory behave like two page loads of the same browser.
pub fn file_session(dir: &Path) -> Session<FileStore> {
    Session::new(FileStore::new(dir), storage_key())
}

/// The demo account for `role`.
pub fn demo_user(role: Role) -> User {
    mock_users()
        .into_iter()
        .find(|u| u.role == role)
        .expect("every role has a demo account")
}

/// A completed sign-in form for `role`'s demo account.
pub fn login_form(role: Role) -> LoginForm {
    LoginForm {
        email: demo_user(role).email,
        password: DEMO_PASSWORD.to_string(),
        role: role.as_str().to_string(),
    }
}
