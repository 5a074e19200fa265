//! The permission key-space shared by routes, menu items, and sessions.

pub mod group;
pub mod key;
pub mod set;

pub use group::PermissionGroup;
pub use key::{ParsePermissionError, Permission};
pub use set::{PermissionSet, WILDCARD};
