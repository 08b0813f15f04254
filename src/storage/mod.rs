//! Snapshot persistence for lexivault
//!
//! The whole application state (settings, vocabulary, current text) is
//! serialized as a single JSON snapshot under one fixed key. Writes are
//! write-through: the state layer persists after every mutation. A missing
//! or corrupt snapshot is a recovery path, never a fatal error.

pub mod file_storage;
pub mod models;

pub use file_storage::{SnapshotStorage, SnapshotStorageError, SNAPSHOT_KEY};
pub use models::Snapshot;
