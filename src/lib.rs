//! # lexivault
//!
//! Core engine of a vocabulary trainer:
//!
//! - **SM-2 scheduling**: pure review grading with interval growth,
//!   easiness adaptation, and lapse handling ([`srs`])
//! - **Vocabulary store**: ordered collection with case-insensitive dedup
//!   and a due-set query ([`vocab`])
//! - **Snapshot persistence**: the whole state as one JSON blob, written
//!   through on every mutation ([`storage`])
//!
//! Screens, navigation, and content generation live in the embedding
//! application; this crate only owns state and scheduling. All operations
//! are synchronous and single-threaded; wall-clock time is read in exactly
//! one place ([`AppState`]), everything below it takes an explicit `now`.

pub mod reader;
pub mod settings;
pub mod srs;
pub mod storage;
pub mod vocab;

use chrono::Utc;
use uuid::Uuid;

use reader::GeneratedText;
use settings::{SettingsUpdate, UserSettings};
use storage::{Snapshot, SnapshotStorage, SnapshotStorageError};
use vocab::{AddOutcome, VocabItem, VocabStats, VocabStore};

/// Current time in epoch milliseconds
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Application state: settings, vocabulary, and the current reading text
///
/// The in-memory state is authoritative; the snapshot on disk is a mirror.
/// Every mutator applies its change in memory first and then persists the
/// full snapshot, so an `Err` from a mutator means "state updated, snapshot
/// stale" — callers should surface it as a non-blocking warning and carry
/// on.
pub struct AppState {
    settings: UserSettings,
    vocab: VocabStore,
    current_text: Option<GeneratedText>,
    storage: SnapshotStorage,
}

impl AppState {
    /// Initialize state from the persisted snapshot
    ///
    /// A missing or corrupt snapshot falls back to an empty collection and
    /// default settings (logged, never fatal).
    pub fn init(storage: SnapshotStorage) -> Self {
        let snapshot = storage.load_or_default();
        Self {
            settings: snapshot.settings,
            vocab: VocabStore::from_items(snapshot.vocab),
            current_text: snapshot.current_text,
            storage,
        }
    }

    fn persist(&self) -> Result<(), SnapshotStorageError> {
        let snapshot = Snapshot {
            settings: self.settings.clone(),
            vocab: self.vocab.items().to_vec(),
            current_text: self.current_text.clone(),
        };
        self.storage.store(&snapshot)
    }

    // ==================== Vocabulary ====================

    /// Add a vocabulary item; a case-insensitive word duplicate is a no-op
    pub fn add_vocab(&mut self, item: VocabItem) -> Result<AddOutcome, SnapshotStorageError> {
        let outcome = self.vocab.add(item);
        if outcome == AddOutcome::Added {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Remove a vocabulary item by id; absent ids are a no-op
    pub fn remove_vocab(&mut self, id: Uuid) -> Result<bool, SnapshotStorageError> {
        let removed = self.vocab.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Grade a review at the current wall-clock time
    pub fn review_vocab(&mut self, id: Uuid, quality: i32) -> Result<bool, SnapshotStorageError> {
        self.review_vocab_at(id, quality, now_ms())
    }

    /// Grade a review at an explicit time; absent ids are a no-op
    pub fn review_vocab_at(
        &mut self,
        id: Uuid,
        quality: i32,
        now_ms: i64,
    ) -> Result<bool, SnapshotStorageError> {
        let reviewed = self.vocab.review(id, quality, now_ms).is_some();
        if reviewed {
            self.persist()?;
        }
        Ok(reviewed)
    }

    /// Items currently due for review, soonest first
    pub fn review_batch(&self) -> Vec<&VocabItem> {
        self.vocab.due_items(now_ms())
    }

    /// Collection statistics at the current wall-clock time
    pub fn vocab_stats(&self) -> VocabStats {
        self.vocab.stats(now_ms())
    }

    pub fn vocab(&self) -> &VocabStore {
        &self.vocab
    }

    // ==================== Settings ====================

    /// Merge a partial settings update
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), SnapshotStorageError> {
        self.settings.apply(update);
        self.persist()
    }

    /// Mark onboarding as completed
    pub fn complete_onboarding(&mut self) -> Result<(), SnapshotStorageError> {
        self.settings.has_onboarded = true;
        self.persist()
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    // ==================== Reading text ====================

    /// Replace the reader's current text
    pub fn set_current_text(
        &mut self,
        text: Option<GeneratedText>,
    ) -> Result<(), SnapshotStorageError> {
        self.current_text = text;
        self.persist()
    }

    pub fn current_text(&self) -> Option<&GeneratedText> {
        self.current_text.as_ref()
    }
}
