use pretty_assertions::assert_eq;
use session::SessionStore;
use shared_types::Role;

use crate::common;

#[test]
fn test_login_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = common::file_session(dir.path());
    first.sign_in(&common::login_form(Role::PawnshopOwner)).unwrap();

    let mut reloaded = common::file_session(dir.path());
    let restored = reloaded.restore().cloned();
    assert_eq!(restored, Some(common::demo_user(Role::PawnshopOwner)));
    assert_eq!(reloaded.role(), Some(Role::PawnshopOwner));
}

#[test]
fn test_logout_clears_record_for_next_load() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = common::file_session(dir.path());
    session.sign_in(&common::login_form(Role::SuperAdmin)).unwrap();
    session.logout();

    let mut reloaded = common::file_session(dir.path());
    assert!(reloaded.restore().is_none());
    assert!(!reloaded.is_authenticated());
}

#[test]
fn test_corrupted_record_is_dropped_on_boot() {
    let dir = tempfile::tempdir().unwrap();
    let key = common::storage_key();

    let seeded = common::file_session(dir.path());
    seeded.store().write(&key, "{\"id\":").unwrap();

    let mut session = common::file_session(dir.path());
    assert!(session.restore().is_none());
    assert_eq!(session.store().read(&key).unwrap(), None);
}

#[test]
fn test_record_shape_matches_user_json() {
    let dir = tempfile::tempdir().unwrap();
    let key = common::storage_key();

    let mut session = common::file_session(dir.path());
    session.sign_in(&common::login_form(Role::SuperAdmin)).unwrap();

    let raw = session.store().read(&key).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "1");
    assert_eq!(value["email"], "admin@auction.com");
    assert_eq!(value["role"], "super_admin");
    assert!(value.get("avatar").is_none());
}

#[test]
fn test_wrong_role_login_keeps_previous_visitor_signed_out() {
    let dir = tempfile::tempdir().unwrap();

    let mut form = common::login_form(Role::SuperAdmin);
    form.role = Role::PawnshopOwner.as_str().to_string();

    let mut session = common::file_session(dir.path());
    let err = session.sign_in(&form).unwrap_err();
    assert_eq!(err.message, session::INVALID_CREDENTIALS);

    let mut reloaded = common::file_session(dir.path());
    assert!(reloaded.restore().is_none());
}

#[test]
fn test_switching_accounts_overwrites_record() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = common::file_session(dir.path());
    session.sign_in(&common::login_form(Role::SuperAdmin)).unwrap();
    session.logout();
    session.sign_in(&common::login_form(Role::PawnshopOwner)).unwrap();

    let mut reloaded = common::file_session(dir.path());
    assert_eq!(reloaded.restore().map(|u| u.role), Some(Role::PawnshopOwner));
}
