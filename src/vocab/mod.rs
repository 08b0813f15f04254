//! Vocabulary storage and review for lexivault
//!
//! This module provides:
//! - Vocabulary item model (word, senses, provenance, SRS state)
//! - Ordered item collection with case-insensitive dedup
//! - Due-set query and review dispatch into the SM-2 scheduler

pub mod models;
pub mod store;

pub use models::*;
pub use store::{AddOutcome, VocabStore};
