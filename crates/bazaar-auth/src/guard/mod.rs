//! Route protection for dashboard views.

pub mod decision;
pub mod enforcer;
pub mod route;
pub mod table;

pub use decision::{Denial, DenialOutcome, DenialReason, GuardDecision};
pub use enforcer::RouteGuard;
pub use route::RouteDeclaration;
pub use table::RouteTable;
