//! Spaced repetition scheduling for vocabulary items
//!
//! This module provides:
//! - SM-2 review scheduling (pure, clock-free)
//! - Per-item memory state (repetition streak, interval, easiness)

pub mod algorithm;

pub use algorithm::{
    calculate_next_review, SrsState, DEFAULT_EASINESS, MASTERY_REPETITIONS, MIN_EASINESS,
    MIN_INTERVAL_DAYS, MS_PER_DAY, PASS_THRESHOLD, SECOND_INTERVAL_DAYS,
};
