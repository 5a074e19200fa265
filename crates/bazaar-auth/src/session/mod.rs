//! The authenticated admin's session: its persisted record, stores, and the
//! provider that hands snapshots to the rest of the dashboard.

pub mod model;
pub mod provider;
pub mod store;

pub use model::{Session, SessionRecord};
pub use provider::{SessionProvider, SessionState};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
