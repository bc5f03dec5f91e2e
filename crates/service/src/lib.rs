//! Service layer for the catalog: the persisted `State` aggregate, the
//! `StateStore` capability and its implementations, and the `Catalog`
//! operations the HTTP handlers call.

pub mod errors;
pub mod storage;
pub mod catalog;

pub use catalog::Catalog;
pub use storage::state_store::{Resource, State, StateStore};
