//! Integration tests for route guarding over persisted sessions.

use bazaar_auth::guard::{GuardDecision, RouteGuard, RouteTable};
use bazaar_core::config::GuardConfig;

use crate::helpers::{TestApp, record};

fn table() -> RouteTable {
    RouteTable::dashboard(&GuardConfig::default().landing_path)
}

#[test]
fn test_staff_with_view_only() {
    let app = TestApp::with_record(&record("staff", &["orders.view"], false));
    let guard = RouteGuard::default();
    let routes = table();

    let session = app.provider.resolve();
    let eval = session.evaluator();
    assert!(eval.has_permission_key("orders.view"));
    assert!(!eval.has_permission_key("orders.update"));

    let view = routes.lookup("/orders/42").unwrap();
    assert!(guard.check(view, &app.provider).is_granted());

    let edit = routes.lookup("/orders/42/edit").unwrap();
    assert_eq!(guard.check(edit, &app.provider).redirect_target(), Some("/dashboard"));
}

#[test]
fn test_wildcard_staff_is_not_super_admin() {
    let app = TestApp::with_record(&record("staff", &["*"], false));
    let guard = RouteGuard::default();
    let routes = table();

    let session = app.provider.resolve();
    assert!(session.evaluator().has_permission_key("anything.random"));
    assert!(!session.evaluator().is_super_admin());

    assert!(guard.check(routes.lookup("/payouts").unwrap(), &app.provider).is_granted());
    assert!(!guard.check(routes.lookup("/roles").unwrap(), &app.provider).is_granted());
}

#[test]
fn test_flagged_super_admin_with_no_grants() {
    let app = TestApp::with_record(&record("manager", &[], true));
    let guard = RouteGuard::default();
    let routes = table();

    let session = app.provider.resolve();
    assert!(session.evaluator().has_permission_key("orders.update"));
    for route in routes.routes() {
        assert!(guard.check(route, &app.provider).is_granted(), "{}", route.path);
    }
}

#[test]
fn test_no_loading_after_resolution() {
    let app = TestApp::with_record(&record("staff", &["orders.view"], false));
    let guard = RouteGuard::default();
    let routes = table();
    let route = routes.lookup("/orders").unwrap();

    assert_eq!(guard.check(route, &app.provider), GuardDecision::Loading);
    app.provider.resolve();

    for _ in 0..3 {
        assert_ne!(guard.check(route, &app.provider), GuardDecision::Loading);
        app.provider.reload();
    }
    app.provider.logout().unwrap();
    assert_ne!(guard.check(route, &app.provider), GuardDecision::Loading);
}

#[test]
fn test_signed_out_goes_to_login_not_landing() {
    let app = TestApp::new();
    let guard = RouteGuard::default();
    let routes = table();
    app.provider.resolve();

    let decision = guard.check(routes.lookup("/orders").unwrap(), &app.provider);
    assert_eq!(decision.redirect_target(), Some("/login"));
}
