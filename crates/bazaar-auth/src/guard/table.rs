//! The dashboard's protected routes.

use crate::permission::Permission;

use super::route::RouteDeclaration;

/// Ordered route declarations; the first matching pattern wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDeclaration>,
}

impl RouteTable {
    /// Creates a table from declarations in match order.
    pub fn new(routes: Vec<RouteDeclaration>) -> Self {
        Self { routes }
    }

    /// The admin dashboard's routes. `landing_path` is declared exempt.
    pub fn dashboard(landing_path: &str) -> Self {
        use Permission::*;

        fn r(path: &str) -> RouteDeclaration {
            RouteDeclaration::new(path)
        }

        Self::new(vec![
            r(landing_path).exempt(),
            r("/orders").requires(OrdersView),
            r("/orders/:id").requires(OrdersView),
            r("/orders/:id/edit").requires(OrdersUpdate),
            r("/products").requires(ProductsView),
            r("/products/new").requires(ProductsCreate),
            r("/products/:id").requires(ProductsView),
            r("/products/:id/edit").requires(ProductsEdit),
            r("/categories").requires(CategoriesView),
            r("/sellers").requires(SellersView),
            r("/sellers/applications").requires(SellersApprove),
            r("/sellers/:id").requires(SellersView),
            r("/drivers").requires(DriversView),
            r("/drivers/applications").requires(DriversApprove),
            r("/drivers/:id").requires(DriversView),
            r("/customers").requires(CustomersView),
            r("/payouts").requires(PayoutsView),
            r("/coupons").requires(CouponsView),
            r("/coupons/new").requires(CouponsCreate),
            r("/coupons/:id/edit").requires(CouponsEdit),
            r("/reviews").requires(ReviewsView),
            r("/reports").requires(ReportsView),
            r("/notifications").requires(NotificationsSend),
            r("/users").requires(UsersView),
            r("/roles").requires(RolesView).super_admin_only(),
            r("/roles/:id/edit").requires(RolesEdit).super_admin_only(),
            r("/policies").requires(PoliciesView),
            r("/policies/:id/edit").requires(PoliciesEdit),
            r("/terms").requires(TermsView),
            r("/terms/:id/edit").requires(TermsEdit),
            r("/settings").requires(SettingsView),
        ])
    }

    /// The first declaration matching `path`.
    pub fn lookup(&self, path: &str) -> Option<&RouteDeclaration> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// All declarations in match order.
    pub fn routes(&self) -> &[RouteDeclaration] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_routes_win_over_params() {
        let table = RouteTable::dashboard("/dashboard");
        assert_eq!(
            table.lookup("/products/new").unwrap().required_permission,
            Some(Permission::ProductsCreate)
        );
        assert_eq!(
            table.lookup("/sellers/applications").unwrap().required_permission,
            Some(Permission::SellersApprove)
        );
        assert_eq!(
            table.lookup("/products/9").unwrap().required_permission,
            Some(Permission::ProductsView)
        );
    }

    #[test]
    fn test_landing_is_exempt() {
        let table = RouteTable::dashboard("/home");
        assert!(table.lookup("/home").unwrap().exempt);
        assert!(table.lookup("/dashboard").is_none());
    }

    #[test]
    fn test_roles_are_super_admin_only() {
        let table = RouteTable::dashboard("/dashboard");
        assert!(table.lookup("/roles").unwrap().require_super_admin);
        assert!(!table.lookup("/users").unwrap().require_super_admin);
    }

    #[test]
    fn test_unknown_path() {
        let table = RouteTable::dashboard("/dashboard");
        assert!(table.lookup("/nowhere").is_none());
    }
}
