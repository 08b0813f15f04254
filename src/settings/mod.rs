//! User settings for lexivault

pub mod models;

pub use models::*;
