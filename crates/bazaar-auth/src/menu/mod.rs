//! Navigation menu definition and permission-driven filtering.

pub mod dashboard;
pub mod filter;
pub mod model;

pub use filter::MenuFilter;
pub use model::{MenuCategory, MenuDefinition, MenuItem, Visibility};
