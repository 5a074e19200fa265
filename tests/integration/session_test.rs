//! Integration tests for the persisted session store and provider.

use bazaar_auth::session::{Session, SessionStore};

use crate::helpers::{TestApp, record};

#[test]
fn test_unparseable_record_is_signed_out() {
    let app = TestApp::with_raw("{\"role\": \"staff\", \"permissions\": [");
    let session = app.provider.resolve();

    assert!(!session.is_authenticated);
    assert!(session.permissions.is_empty());
    assert_eq!(session.role, "");
    assert!(!session.is_super_admin);
}

#[test]
fn test_missing_record_is_signed_out() {
    let app = TestApp::new();
    assert_eq!(*app.provider.resolve(), Session::anonymous());
}

#[test]
fn test_load_is_stable_until_record_changes() {
    let app = TestApp::with_record(&record("staff", &["orders.view"], false));
    let first = app.store.load();
    let second = app.store.load();
    assert_eq!(first, second);

    app.store
        .save(&record("staff", &["orders.view", "orders.update"], false))
        .unwrap();
    assert_ne!(app.store.load(), first);
}

#[test]
fn test_login_logout_cycle_through_file() {
    let app = TestApp::new();
    app.provider.resolve();

    app.provider
        .login(record("manager", &["*"], false))
        .unwrap();
    let reread = app.store.load();
    assert!(reread.is_authenticated);
    assert!(reread.permissions.is_wildcard());
    assert!(reread.logged_in_at.is_some());

    app.provider.logout().unwrap();
    assert!(!app.store.path().exists());
    app.provider.logout().unwrap();
    assert!(!app.provider.resolve().is_authenticated);
}
