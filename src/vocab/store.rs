//! Ordered vocabulary collection
//!
//! The store owns collection invariants (most-recent-first ordering,
//! case-insensitive uniqueness by word) and delegates all schedule math to
//! the SM-2 scheduler. It performs no I/O; persistence of the collection is
//! handled by the snapshot layer above it.

use uuid::Uuid;

use crate::srs::calculate_next_review;

use super::models::{VocabItem, VocabStats};

/// Outcome of an insert attempt
///
/// A duplicate is a silent no-op, not an error; the outcome lets callers
/// that care tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was inserted at the front of the collection
    Added,
    /// An item with the same word (case-insensitive) already exists;
    /// the collection is unchanged
    DuplicateWord,
}

/// Ordered collection of vocabulary items, most recently added first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabStore {
    items: Vec<VocabItem>,
}

impl VocabStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a store from a persisted snapshot, preserving order
    pub fn from_items(items: Vec<VocabItem>) -> Self {
        Self { items }
    }

    /// Insert an item at the front of the collection
    ///
    /// If an existing item's word matches case-insensitively the call is a
    /// no-op and the first-written item wins. The store, not the caller, is
    /// the arbiter of uniqueness.
    pub fn add(&mut self, item: VocabItem) -> AddOutcome {
        let word = item.word.to_lowercase();
        if self.items.iter().any(|v| v.word.to_lowercase() == word) {
            return AddOutcome::DuplicateWord;
        }
        self.items.insert(0, item);
        AddOutcome::Added
    }

    /// Remove the item with the given id
    ///
    /// Returns `false` (not an error) if no such item exists.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|v| v.id != id);
        self.items.len() != before
    }

    /// Grade a review for the item with the given id
    ///
    /// Runs the scheduler and replaces the item's memory state in place,
    /// preserving its position in the ordering. Returns the updated item,
    /// or `None` (not an error) if the id is absent.
    pub fn review(&mut self, id: Uuid, quality: i32, now_ms: i64) -> Option<&VocabItem> {
        let item = self.items.iter_mut().find(|v| v.id == id)?;
        item.srs = calculate_next_review(&item.srs, quality, now_ms);
        Some(item)
    }

    /// Items due at the given time, soonest first
    pub fn due_items(&self, now_ms: i64) -> Vec<&VocabItem> {
        let mut due: Vec<&VocabItem> = self.items.iter().filter(|v| v.is_due(now_ms)).collect();
        due.sort_by_key(|v| v.srs.next_review);
        due
    }

    /// Case-insensitive search over word and primary translation
    pub fn search(&self, query: &str) -> Vec<&VocabItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|v| {
                v.word.to_lowercase().contains(&query)
                    || v.primary_sense()
                        .is_some_and(|s| s.translation.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Collection statistics at the given time
    pub fn stats(&self, now_ms: i64) -> VocabStats {
        let total_items = self.items.len();
        let mastered_items = self.items.iter().filter(|v| v.is_mastered()).count();
        let due_items = self.items.iter().filter(|v| v.is_due(now_ms)).count();
        let mastery_percent = if total_items > 0 {
            (mastered_items as f64 / total_items as f64 * 100.0).round() as u32
        } else {
            0
        };

        VocabStats {
            total_items,
            due_items,
            mastered_items,
            mastery_percent,
        }
    }

    /// Get an item by id
    pub fn get(&self, id: Uuid) -> Option<&VocabItem> {
        self.items.iter().find(|v| v.id == id)
    }

    /// All items in collection order (most recent first)
    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::{MIN_EASINESS, MIN_INTERVAL_DAYS, MS_PER_DAY};
    use crate::vocab::models::VocabSense;

    const T0: i64 = 1_700_000_000_000;

    fn item(word: &str, translation: &str) -> VocabItem {
        VocabItem::new(
            word,
            "noun",
            "",
            "Spanish",
            "English",
            vec![VocabSense::new(translation, "")],
            T0,
        )
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        store.add(item("perro", "dog"));

        assert_eq!(store.items()[0].word, "perro");
        assert_eq!(store.items()[1].word, "casa");
    }

    #[test]
    fn test_add_dedup_case_insensitive() {
        let mut store = VocabStore::new();
        assert_eq!(store.add(item("Casa", "house")), AddOutcome::Added);
        assert_eq!(store.add(item("casa", "home")), AddOutcome::DuplicateWord);
        assert_eq!(store.add(item("CASA", "house")), AddOutcome::DuplicateWord);

        // First write wins
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].word, "Casa");
        assert_eq!(store.items()[0].primary_sense().unwrap().translation, "house");
    }

    #[test]
    fn test_remove_absent_leaves_store_unchanged() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        let before = store.clone();

        assert!(!store.remove(Uuid::new_v4()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        let id = store.items()[0].id;

        assert!(store.remove(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_review_updates_in_place() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        store.add(item("perro", "dog"));
        let casa_id = store.items()[1].id;

        let updated = store.review(casa_id, 5, T0).unwrap();
        assert_eq!(updated.srs.repetition, 1);
        assert_eq!(updated.srs.next_review, T0 + MS_PER_DAY);

        // Position in the ordering is preserved
        assert_eq!(store.items()[1].id, casa_id);
        assert_eq!(store.items()[0].word, "perro");
    }

    #[test]
    fn test_review_absent_is_noop() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        let before = store.clone();

        assert!(store.review(Uuid::new_v4(), 5, T0).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_due_items_filtering_and_order() {
        let mut store = VocabStore::new();
        store.add(item("uno", "one"));
        store.add(item("dos", "two"));
        store.add(item("tres", "three"));

        let ids: Vec<Uuid> = store.items().iter().map(|v| v.id).collect();
        // tres: overdue, dos: due exactly now, uno: future
        store.items[0].srs.next_review = T0 - MS_PER_DAY; // tres
        store.items[1].srs.next_review = T0; // dos
        store.items[2].srs.next_review = T0 + MS_PER_DAY; // uno

        let due = store.due_items(T0);
        assert_eq!(due.len(), 2);
        // Soonest first
        assert_eq!(due[0].id, ids[0]);
        assert_eq!(due[1].id, ids[1]);
    }

    #[test]
    fn test_reference_review_sequence() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        let id = store.items()[0].id;

        let first = store.review(id, 5, T0).unwrap();
        assert_eq!(first.srs.repetition, 1);
        assert_eq!(first.srs.interval, 1.0);
        assert_eq!(first.srs.next_review, T0 + 86_400_000);

        let second = store.review(id, 5, T0 + 86_400_000).unwrap();
        assert_eq!(second.srs.repetition, 2);
        assert_eq!(second.srs.interval, 6.0);
        assert_eq!(second.srs.next_review, T0 + 7 * 86_400_000);

        let third = store.review(id, 2, T0 + 7 * 86_400_000).unwrap();
        assert_eq!(third.srs.repetition, 0);
        assert_eq!(third.srs.interval, MIN_INTERVAL_DAYS);
        assert!(third.srs.easiness >= MIN_EASINESS);
    }

    #[test]
    fn test_search_word_and_translation() {
        let mut store = VocabStore::new();
        store.add(item("casa", "house"));
        store.add(item("perro", "dog"));

        assert_eq!(store.search("CAS").len(), 1);
        assert_eq!(store.search("dog").len(), 1);
        assert_eq!(store.search("gato").len(), 0);
        assert_eq!(store.search("").len(), 2);
    }

    #[test]
    fn test_stats_mastery() {
        let mut store = VocabStore::new();
        store.add(item("uno", "one"));
        store.add(item("dos", "two"));
        store.add(item("tres", "three"));
        store.items[0].srs.repetition = 4;
        store.items[1].srs.repetition = 3;
        store.items[2].srs.next_review = T0 + MS_PER_DAY;

        let stats = store.stats(T0);
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.mastered_items, 1);
        assert_eq!(stats.mastery_percent, 33);
        assert_eq!(stats.due_items, 2);

        let empty = VocabStore::new().stats(T0);
        assert_eq!(empty.mastery_percent, 0);
    }
}
