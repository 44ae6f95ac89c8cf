//! Release storage layer
//!
//! - source.rs: `ReleaseSource` trait and the `Release` row type
//! - memory.rs: in-memory store, loadable from JSON
//! - sqlite.rs: SQLite-backed store

pub mod memory;
pub mod source;
pub mod sqlite;

pub use memory::MemoryStore;
pub use source::{Release, ReleaseSource};
pub use sqlite::SqliteStore;
