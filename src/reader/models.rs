//! Data models for generated reading material

use serde::{Deserialize, Serialize};

/// A generated reading text in the target language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedText {
    pub title: String,
    pub content: String,
    pub target_language: String,
}

impl GeneratedText {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            target_language: target_language.into(),
        }
    }
}
