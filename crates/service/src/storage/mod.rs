//! Storage abstractions for service layer
//!
//! `StateStore` is the load/save capability over the whole `State` aggregate.
//! `JsonFileStore` persists it as one JSON file; `MemoryStore` keeps it in memory.

pub mod state_store;
pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
