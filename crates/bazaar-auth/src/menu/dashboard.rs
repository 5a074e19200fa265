//! The built-in admin dashboard menu.

use crate::permission::Permission::*;

use super::model::{MenuCategory, MenuDefinition, MenuItem};

impl MenuDefinition {
    /// The default navigation for the admin dashboard.
    pub fn dashboard() -> Self {
        Self::new(vec![
            MenuCategory::new(
                "Overview",
                vec![
                    MenuItem::new("/dashboard", "Dashboard", "layout-dashboard"),
                    MenuItem::new("/reports", "Reports", "bar-chart").requires(ReportsView),
                ],
            ),
            MenuCategory::new(
                "Sales",
                vec![
                    MenuItem::new("/orders", "Orders", "shopping-cart").requires(OrdersView),
                    MenuItem::new("/payouts", "Payouts", "wallet").requires(PayoutsView),
                    MenuItem::new("/customers", "Customers", "users").requires(CustomersView),
                ],
            ),
            MenuCategory::new(
                "Catalog",
                vec![
                    MenuItem::new("/products", "Products", "package")
                        .requires(ProductsView)
                        .with_children(vec![
                            MenuItem::new("/products", "All Products", "list"),
                            MenuItem::new("/products/new", "Add Product", "plus")
                                .requires(ProductsCreate),
                        ]),
                    MenuItem::new("/categories", "Categories", "folder").requires(CategoriesView),
                    MenuItem::new("/reviews", "Reviews", "star").requires(ReviewsView),
                ],
            ),
            MenuCategory::new(
                "Partners",
                vec![
                    MenuItem::new("/sellers", "Sellers", "store")
                        .requires(SellersView)
                        .with_children(vec![
                            MenuItem::new("/sellers", "All Sellers", "list"),
                            MenuItem::new("/sellers/applications", "Applications", "inbox")
                                .requires(SellersApprove),
                        ]),
                    MenuItem::new("/drivers", "Drivers", "truck")
                        .requires(DriversView)
                        .with_children(vec![
                            MenuItem::new("/drivers", "All Drivers", "list"),
                            MenuItem::new("/drivers/applications", "Applications", "inbox")
                                .requires(DriversApprove),
                        ]),
                ],
            ),
            MenuCategory::new(
                "Marketing",
                vec![
                    MenuItem::new("/coupons", "Coupons", "ticket").requires(CouponsView),
                    MenuItem::new("/notifications", "Notifications", "bell")
                        .requires(NotificationsSend),
                ],
            ),
            MenuCategory::new(
                "Content",
                vec![
                    MenuItem::new("/policies", "Policies", "shield").requires(PoliciesView),
                    MenuItem::new("/terms", "Terms & Conditions", "file-text").requires(TermsView),
                ],
            ),
            MenuCategory::new(
                "Administration",
                vec![
                    MenuItem::new("/users", "Admin Users", "user-cog").requires(UsersView),
                    MenuItem::new("/roles", "Roles & Permissions", "key").requires(RolesView),
                ],
            )
            .super_admin_only(),
            MenuCategory::new(
                "System",
                vec![MenuItem::new("/settings", "Settings", "settings").requires(SettingsView)],
            ),
        ])
    }
}
