//! Named permission groups for the role editor.
//!
//! Groups only organize the key-space for display; authorization never
//! looks at them.

use serde::Serialize;

use super::key::Permission;

/// A named, ordered bundle of related permission keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionGroup {
    /// Display name, e.g. `"Orders Management"`.
    pub name: &'static str,
    /// Member permissions in display order.
    pub permissions: &'static [Permission],
}

use Permission::*;

const GROUPS: &[PermissionGroup] = &[
    PermissionGroup {
        name: "Dashboard",
        permissions: &[DashboardView],
    },
    PermissionGroup {
        name: "Orders Management",
        permissions: &[
            OrdersView,
            OrdersUpdate,
            OrdersCancel,
            OrdersRefund,
            OrdersExport,
        ],
    },
    PermissionGroup {
        name: "Catalog Management",
        permissions: &[
            ProductsView,
            ProductsCreate,
            ProductsEdit,
            ProductsDelete,
            ProductsApprove,
            CategoriesView,
            CategoriesCreate,
            CategoriesEdit,
            CategoriesDelete,
        ],
    },
    PermissionGroup {
        name: "Sellers Management",
        permissions: &[SellersView, SellersApprove, SellersEdit, SellersSuspend],
    },
    PermissionGroup {
        name: "Drivers Management",
        permissions: &[DriversView, DriversApprove, DriversEdit, DriversSuspend],
    },
    PermissionGroup {
        name: "Customers Management",
        permissions: &[CustomersView, CustomersEdit],
    },
    PermissionGroup {
        name: "Payouts",
        permissions: &[PayoutsView, PayoutsProcess],
    },
    PermissionGroup {
        name: "Marketing",
        permissions: &[
            CouponsView,
            CouponsCreate,
            CouponsEdit,
            CouponsDelete,
            NotificationsSend,
        ],
    },
    PermissionGroup {
        name: "Reviews",
        permissions: &[ReviewsView, ReviewsModerate],
    },
    PermissionGroup {
        name: "Reports",
        permissions: &[ReportsView, ReportsExport],
    },
    PermissionGroup {
        name: "Users Management",
        permissions: &[UsersView, UsersCreate, UsersEdit, UsersDelete],
    },
    PermissionGroup {
        name: "Roles & Permissions",
        permissions: &[RolesView, RolesCreate, RolesEdit, RolesDelete],
    },
    PermissionGroup {
        name: "Policies & Terms",
        permissions: &[
            PoliciesView,
            PoliciesEdit,
            PoliciesPublish,
            TermsView,
            TermsEdit,
            TermsPublish,
        ],
    },
    PermissionGroup {
        name: "Settings",
        permissions: &[SettingsView, SettingsEdit],
    },
];

impl PermissionGroup {
    /// All groups in display order.
    pub fn all() -> &'static [PermissionGroup] {
        GROUPS
    }

    /// The group a permission is listed under.
    pub fn of(permission: Permission) -> Option<&'static PermissionGroup> {
        GROUPS.iter().find(|g| g.permissions.contains(&permission))
    }

    /// Looks up a group by its display name.
    pub fn by_name(name: &str) -> Option<&'static PermissionGroup> {
        GROUPS.iter().find(|g| g.name == name)
    }
}
