//! [`KvStore`](mockdesk_core::traits::KvStore) implementations.
//!
//! - `memory` — process-local map, the default; starts empty on every run
//! - `sqlite` — a single `kv` table, survives restarts

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
