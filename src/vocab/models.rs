//! Data models for the vocabulary system

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::srs::{SrsState, MASTERY_REPETITIONS};

/// One translation of a word, with an example of usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabSense {
    pub translation: String,
    #[serde(default)]
    pub example: String,
}

impl VocabSense {
    pub fn new(translation: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            example: example.into(),
        }
    }
}

/// A saved vocabulary word with its senses and review state
///
/// Senses are ordered; the first sense is the primary display sense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabItem {
    pub id: Uuid,
    /// Surface form in the target language; collections deduplicate on this,
    /// case-insensitively
    pub word: String,
    /// Part-of-speech tag (free-form short string)
    #[serde(default)]
    pub pos: String,
    /// Sentence or passage the word was saved from
    #[serde(default)]
    pub context: String,
    pub target_language: String,
    pub native_language: String,
    pub senses: Vec<VocabSense>,
    /// Spaced repetition state, stored inline with the item
    #[serde(flatten)]
    pub srs: SrsState,
}

impl VocabItem {
    /// Create a new item, due for review immediately
    ///
    /// `senses` should be non-empty; the first sense is what list views show.
    pub fn new(
        word: impl Into<String>,
        pos: impl Into<String>,
        context: impl Into<String>,
        target_language: impl Into<String>,
        native_language: impl Into<String>,
        senses: Vec<VocabSense>,
        now_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            pos: pos.into(),
            context: context.into(),
            target_language: target_language.into(),
            native_language: native_language.into(),
            senses,
            srs: SrsState::new(now_ms),
        }
    }

    /// The primary display sense (first in the list)
    pub fn primary_sense(&self) -> Option<&VocabSense> {
        self.senses.first()
    }

    /// Check if the item is due for review at the given time
    pub fn is_due(&self, now_ms: i64) -> bool {
        self.srs.is_due(now_ms)
    }

    /// An item is mastered once its success streak reaches the threshold
    pub fn is_mastered(&self) -> bool {
        self.srs.repetition >= MASTERY_REPETITIONS
    }
}

/// Statistics for a vocabulary collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabStats {
    pub total_items: usize,
    pub due_items: usize,
    pub mastered_items: usize,
    /// Mastered share of the collection, rounded to the nearest percent
    pub mastery_percent: u32,
}
