//! SM-2 Spaced Repetition Algorithm
//!
//! Implementation of the SuperMemo 2 algorithm for calculating
//! optimal review intervals based on recall quality.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation
//!
//! The scheduler is a pure function: the caller supplies the current time,
//! so identical inputs always produce identical schedules.

use serde::{Deserialize, Serialize};

/// Minimum easiness factor allowed
pub const MIN_EASINESS: f64 = 1.3;

/// Easiness assigned to freshly created items
pub const DEFAULT_EASINESS: f64 = 2.5;

/// Quality at or above this value counts as a successful recall
pub const PASS_THRESHOLD: i32 = 3;

/// Interval (days) after the first successful review, and the restart
/// interval after a lapse
pub const MIN_INTERVAL_DAYS: f64 = 1.0;

/// Interval (days) after the second consecutive successful review
pub const SECOND_INTERVAL_DAYS: f64 = 6.0;

/// Milliseconds per day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Repetition streak at which an item counts as mastered
pub const MASTERY_REPETITIONS: u32 = 4;

/// Memory state of a single item in the spaced repetition system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsState {
    /// Consecutive successful reviews (resets to 0 on a lapse)
    #[serde(default)]
    pub repetition: u32,
    /// Current scheduling interval in days
    #[serde(default)]
    pub interval: f64,
    /// SM-2 easiness factor (default 2.5, never below 1.3)
    #[serde(default = "default_easiness")]
    pub easiness: f64,
    /// Epoch milliseconds at or after which the item is due
    #[serde(default)]
    pub next_review: i64,
}

fn default_easiness() -> f64 {
    DEFAULT_EASINESS
}

impl SrsState {
    /// State for a freshly created item: due immediately
    pub fn new(now_ms: i64) -> Self {
        Self {
            repetition: 0,
            interval: 0.0,
            easiness: DEFAULT_EASINESS,
            next_review: now_ms,
        }
    }

    /// Check whether the item is due at the given time
    pub fn is_due(&self, now_ms: i64) -> bool {
        self.next_review <= now_ms
    }
}

/// Calculate the state after a review using the SM-2 algorithm
///
/// # Arguments
/// * `state` - Memory state before the review
/// * `quality` - Recall quality (0-5; out-of-range values are clamped)
/// * `now_ms` - Review time in epoch milliseconds
///
/// # Returns
/// The new memory state. `next_review` is always `now_ms` plus the new
/// interval, and never in the past relative to `now_ms`.
pub fn calculate_next_review(state: &SrsState, quality: i32, now_ms: i64) -> SrsState {
    // Grading input comes straight from the UI; degrade gracefully
    let quality = quality.clamp(0, 5);

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
    // Rewards quality 5, penalizes everything below it; a failing grade
    // always nudges easiness down.
    let easiness = (state.easiness
        + (0.1 - (5 - quality) as f64 * (0.08 + (5 - quality) as f64 * 0.02)))
        .max(MIN_EASINESS);

    let (repetition, interval) = if quality >= PASS_THRESHOLD {
        let repetition = state.repetition + 1;
        let interval = match repetition {
            1 => MIN_INTERVAL_DAYS,
            2 => SECOND_INTERVAL_DAYS,
            // Grow by the easiness in effect *before* this review's adjustment
            _ => (state.interval * state.easiness).max(MIN_INTERVAL_DAYS),
        };
        (repetition, interval)
    } else {
        // Lapse: streak and interval restart
        (0, MIN_INTERVAL_DAYS)
    };

    SrsState {
        repetition,
        interval,
        easiness,
        next_review: now_ms + (interval * MS_PER_DAY as f64).round() as i64,
    }
}
