//! # mockdesk-store
//!
//! The local store (key/value backends holding one JSON array per
//! collection) and the per-entity services the HTTP handlers call.

pub mod backend;
pub mod store;

pub use backend::{MemoryBackend, SqliteBackend};
pub use store::{SeedData, StorageKey, Store};
