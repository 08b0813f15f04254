//! Reading material models
//!
//! The core only carries the reader's current text through the state
//! snapshot; generating the text is the collaborator's job.

pub mod models;

pub use models::GeneratedText;
