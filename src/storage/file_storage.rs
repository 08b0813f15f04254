//! File-backed snapshot storage
//!
//! One fixed key maps to one JSON file under the data directory:
//! ```text
//! <base>/lexivault_state.json
//! ```

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::Snapshot;

/// Fixed key the snapshot is stored under
pub const SNAPSHOT_KEY: &str = "lexivault_state";

#[derive(Error, Debug)]
pub enum SnapshotStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, SnapshotStorageError>;

/// Key-value persistence collaborator for the state snapshot
pub struct SnapshotStorage {
    base_path: PathBuf,
}

impl SnapshotStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("lexivault"))
            .ok_or(SnapshotStorageError::DataDirNotFound)
    }

    /// Path of the snapshot file for the fixed key
    fn snapshot_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", SNAPSHOT_KEY))
    }

    /// Load the snapshot, `Ok(None)` when none has been written yet
    ///
    /// A snapshot that exists but fails to parse is an error; callers that
    /// want the recovery behavior use [`load_or_default`](Self::load_or_default).
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    /// Load the snapshot, falling back to defaults on a missing or corrupt file
    ///
    /// Recovery is logged, not raised: a broken snapshot must never stop the
    /// application from starting.
    pub fn load_or_default(&self) -> Snapshot {
        match self.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => Snapshot::default(),
            Err(e) => {
                log::warn!("Snapshot recovery failed, starting empty: {}", e);
                Snapshot::default()
            }
        }
    }

    /// Write the full snapshot under the fixed key
    pub fn store(&self, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let path = self.snapshot_path();
        fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{VocabItem, VocabSense};

    const T0: i64 = 1_700_000_000_000;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            vocab: vec![VocabItem::new(
                "casa",
                "noun",
                "Mi casa es tu casa.",
                "Spanish",
                "English",
                vec![VocabSense::new("house", "My house is your house.")],
                T0,
            )],
            ..Default::default()
        }
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(dir.path().to_path_buf());

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_store_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(dir.path().to_path_buf());

        let snapshot = sample_snapshot();
        storage.store(&snapshot).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(dir.path().to_path_buf());
        fs::write(
            dir.path().join(format!("{}.json", SNAPSHOT_KEY)),
            "{not valid json",
        )
        .unwrap();

        assert!(storage.load().is_err());

        let snapshot = storage.load_or_default();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_store_creates_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("nested");
        let storage = SnapshotStorage::new(nested);

        storage.store(&sample_snapshot()).unwrap();
        assert!(storage.load().unwrap().is_some());
    }
}
