//! Integration tests for menu filtering over persisted sessions.

use bazaar_auth::menu::{MenuCategory, MenuDefinition, MenuFilter, MenuItem};
use bazaar_auth::permission::Permission;

use crate::helpers::{TestApp, record};

#[test]
fn test_management_dropped_without_users_view() {
    let definition = MenuDefinition::new(vec![
        MenuCategory::new(
            "Overview",
            vec![MenuItem::new("/dashboard", "Dashboard", "home")],
        ),
        MenuCategory::new(
            "Management",
            vec![MenuItem::new("/users", "Users", "users").requires(Permission::UsersView)],
        ),
    ]);
    let filter = MenuFilter::new(definition);
    let app = TestApp::with_record(&record("staff", &["orders.view"], false));
    app.provider.resolve();

    let menu = filter.visible(&app.provider).unwrap();
    assert_eq!(menu.categories.len(), 1);
    assert_eq!(menu.categories[0].title, "Overview");
}

#[test]
fn test_super_admin_gets_full_dashboard_menu() {
    let definition = MenuDefinition::dashboard();
    let filter = MenuFilter::new(definition.clone());
    let app = TestApp::with_record(&record("super_admin", &[], false));
    app.provider.resolve();

    assert_eq!(*filter.visible(&app.provider).unwrap(), definition);
}

#[test]
fn test_filtered_menu_is_subsequence_of_definition() {
    let definition = MenuDefinition::dashboard();
    let filter = MenuFilter::new(definition.clone());
    let app = TestApp::with_record(&record(
        "support",
        &["orders.view", "coupons.view", "terms.view", "settings.view"],
        false,
    ));
    app.provider.resolve();
    let menu = filter.visible(&app.provider).unwrap();

    let all_paths = definition.paths();
    let mut cursor = all_paths.iter();
    for path in menu.paths() {
        assert!(cursor.any(|p| *p == path), "{path} out of order");
    }
    assert_eq!(
        menu.paths(),
        vec!["/dashboard", "/orders", "/coupons", "/terms", "/settings"]
    );
}

#[test]
fn test_menu_follows_login() {
    let filter = MenuFilter::new(MenuDefinition::dashboard());
    let app = TestApp::new();
    app.provider.resolve();
    assert_eq!(filter.visible(&app.provider).unwrap().paths(), vec!["/dashboard"]);

    app.provider
        .login(record("staff", &["payouts.view"], false))
        .unwrap();
    assert_eq!(
        filter.visible(&app.provider).unwrap().paths(),
        vec!["/dashboard", "/payouts"]
    );
}
