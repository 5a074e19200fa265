//! Role-based access control evaluation.

pub mod evaluator;

pub use evaluator::{PermissionEvaluator, SUPER_ADMIN_ROLE};
