//! The closed permission vocabulary.
//!
//! Every permission is a `"<resource>.<action>"` key. Routes and menu items
//! reference [`Permission`] variants, so a misspelled key is a compile error
//! rather than an item that silently never shows up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grantable dashboard capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    // Dashboard
    /// View the dashboard overview.
    DashboardView,

    // Orders
    /// List and inspect orders.
    OrdersView,
    /// Change order status and details.
    OrdersUpdate,
    /// Cancel orders.
    OrdersCancel,
    /// Issue order refunds.
    OrdersRefund,
    /// Export order lists.
    OrdersExport,

    // Catalog
    ProductsView,
    ProductsCreate,
    ProductsEdit,
    ProductsDelete,
    /// Approve seller-submitted products.
    ProductsApprove,
    CategoriesView,
    CategoriesCreate,
    CategoriesEdit,
    CategoriesDelete,

    // Sellers
    SellersView,
    /// Review seller onboarding applications.
    SellersApprove,
    SellersEdit,
    SellersSuspend,

    // Drivers
    DriversView,
    /// Review driver onboarding applications.
    DriversApprove,
    DriversEdit,
    DriversSuspend,

    // Customers
    CustomersView,
    CustomersEdit,

    // Finance
    PayoutsView,
    /// Mark payouts as paid.
    PayoutsProcess,

    // Marketing
    CouponsView,
    CouponsCreate,
    CouponsEdit,
    CouponsDelete,

    // Reviews
    ReviewsView,
    /// Hide or remove reviews.
    ReviewsModerate,

    // Reports
    ReportsView,
    ReportsExport,
    /// Send push notifications and broadcasts.
    NotificationsSend,

    // Administration
    UsersView,
    UsersCreate,
    UsersEdit,
    UsersDelete,
    RolesView,
    RolesCreate,
    RolesEdit,
    RolesDelete,

    // Content
    PoliciesView,
    PoliciesEdit,
    /// Publish a policy revision.
    PoliciesPublish,
    TermsView,
    TermsEdit,
    /// Publish a terms revision.
    TermsPublish,

    // Settings
    SettingsView,
    SettingsEdit,
}

impl Permission {
    /// Every permission, in catalog order.
    pub const ALL: &'static [Permission] = &[
        Self::DashboardView,
        Self::OrdersView,
        Self::OrdersUpdate,
        Self::OrdersCancel,
        Self::OrdersRefund,
        Self::OrdersExport,
        Self::ProductsView,
        Self::ProductsCreate,
        Self::ProductsEdit,
        Self::ProductsDelete,
        Self::ProductsApprove,
        Self::CategoriesView,
        Self::CategoriesCreate,
        Self::CategoriesEdit,
        Self::CategoriesDelete,
        Self::SellersView,
        Self::SellersApprove,
        Self::SellersEdit,
        Self::SellersSuspend,
        Self::DriversView,
        Self::DriversApprove,
        Self::DriversEdit,
        Self::DriversSuspend,
        Self::CustomersView,
        Self::CustomersEdit,
        Self::PayoutsView,
        Self::PayoutsProcess,
        Self::CouponsView,
        Self::CouponsCreate,
        Self::CouponsEdit,
        Self::CouponsDelete,
        Self::ReviewsView,
        Self::ReviewsModerate,
        Self::ReportsView,
        Self::ReportsExport,
        Self::NotificationsSend,
        Self::UsersView,
        Self::UsersCreate,
        Self::UsersEdit,
        Self::UsersDelete,
        Self::RolesView,
        Self::RolesCreate,
        Self::RolesEdit,
        Self::RolesDelete,
        Self::PoliciesView,
        Self::PoliciesEdit,
        Self::PoliciesPublish,
        Self::TermsView,
        Self::TermsEdit,
        Self::TermsPublish,
        Self::SettingsView,
        Self::SettingsEdit,
    ];

    /// The canonical `"<resource>.<action>"` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashboardView => "dashboard.view",
            Self::OrdersView => "orders.view",
            Self::OrdersUpdate => "orders.update",
            Self::OrdersCancel => "orders.cancel",
            Self::OrdersRefund => "orders.refund",
            Self::OrdersExport => "orders.export",
            Self::ProductsView => "products.view",
            Self::ProductsCreate => "products.create",
            Self::ProductsEdit => "products.edit",
            Self::ProductsDelete => "products.delete",
            Self::ProductsApprove => "products.approve",
            Self::CategoriesView => "categories.view",
            Self::CategoriesCreate => "categories.create",
            Self::CategoriesEdit => "categories.edit",
            Self::CategoriesDelete => "categories.delete",
            Self::SellersView => "sellers.view",
            Self::SellersApprove => "sellers.approve",
            Self::SellersEdit => "sellers.edit",
            Self::SellersSuspend => "sellers.suspend",
            Self::DriversView => "drivers.view",
            Self::DriversApprove => "drivers.approve",
            Self::DriversEdit => "drivers.edit",
            Self::DriversSuspend => "drivers.suspend",
            Self::CustomersView => "customers.view",
            Self::CustomersEdit => "customers.edit",
            Self::PayoutsView => "payouts.view",
            Self::PayoutsProcess => "payouts.process",
            Self::CouponsView => "coupons.view",
            Self::CouponsCreate => "coupons.create",
            Self::CouponsEdit => "coupons.edit",
            Self::CouponsDelete => "coupons.delete",
            Self::ReviewsView => "reviews.view",
            Self::ReviewsModerate => "reviews.moderate",
            Self::ReportsView => "reports.view",
            Self::ReportsExport => "reports.export",
            Self::NotificationsSend => "notifications.send",
            Self::UsersView => "users.view",
            Self::UsersCreate => "users.create",
            Self::UsersEdit => "users.edit",
            Self::UsersDelete => "users.delete",
            Self::RolesView => "roles.view",
            Self::RolesCreate => "roles.create",
            Self::RolesEdit => "roles.edit",
            Self::RolesDelete => "roles.delete",
            Self::PoliciesView => "policies.view",
            Self::PoliciesEdit => "policies.edit",
            Self::PoliciesPublish => "policies.publish",
            Self::TermsView => "terms.view",
            Self::TermsEdit => "terms.edit",
            Self::TermsPublish => "terms.publish",
            Self::SettingsView => "settings.view",
            Self::SettingsEdit => "settings.edit",
        }
    }

    /// The resource half of the key, e.g. `"orders"`.
    pub fn resource(&self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map(|(resource, _)| resource)
            .unwrap_or_default()
    }

    /// The action half of the key, e.g. `"view"`.
    pub fn action(&self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map(|(_, action)| action)
            .unwrap_or_default()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not part of the permission vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePermissionError(pub String);

impl fmt::Display for ParsePermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown permission key '{}'", self.0)
    }
}

impl std::error::Error for ParsePermissionError {}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePermissionError(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = ParsePermissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_keys_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for permission in Permission::ALL {
            let key = permission.as_str();
            assert!(seen.insert(key), "duplicate key {key}");
            assert_eq!(key.matches('.').count(), 1, "malformed key {key}");
            assert!(!permission.resource().is_empty());
            assert!(!permission.action().is_empty());
        }
    }

    #[test]
    fn test_parse_known_key() {
        assert_eq!("orders.view".parse::<Permission>(), Ok(Permission::OrdersView));
        assert_eq!(Permission::UsersEdit.to_string(), "users.edit");
        assert_eq!(Permission::PayoutsProcess.resource(), "payouts");
        assert_eq!(Permission::PayoutsProcess.action(), "process");
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "anything.random".parse::<Permission>().unwrap_err();
        assert_eq!(err, ParsePermissionError("anything.random".to_string()));
        assert!("*".parse::<Permission>().is_err());
        assert!("Orders.View".parse::<Permission>().is_err());
    }

    #[test]
    fn test_serde_uses_key_string() {
        let json = serde_json::to_string(&Permission::CouponsCreate).unwrap();
        assert_eq!(json, "\"coupons.create\"");

        let parsed: Permission = serde_json::from_str("\"terms.publish\"").unwrap();
        assert_eq!(parsed, Permission::TermsPublish);

        assert!(serde_json::from_str::<Permission>("\"terms.burn\"").is_err());
    }
}
