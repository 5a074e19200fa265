//! # bazaar-auth
//!
//! Client-side authorization state for the Bazaar admin dashboard.
//!
//! ## Modules
//!
//! - `permission`: the closed permission key-space, wildcard-aware grant sets,
//!   and the permission group catalog used by the role editor
//! - `session`: the persisted session record, session stores, and the
//!   injectable session provider
//! - `rbac`: permission evaluation over a session
//! - `guard`: route declarations and the route guard state machine
//! - `menu`: the navigation menu definition and its permission filter

pub mod guard;
pub mod menu;
pub mod permission;
pub mod rbac;
pub mod session;

pub use guard::{GuardDecision, RouteDeclaration, RouteGuard, RouteTable};
pub use menu::{MenuCategory, MenuDefinition, MenuFilter, MenuItem, Visibility};
pub use permission::{Permission, PermissionGroup, PermissionSet};
pub use rbac::PermissionEvaluator;
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionProvider, SessionRecord, SessionState,
    SessionStore,
};
