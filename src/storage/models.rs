//! Data models for persisted state

use serde::{Deserialize, Serialize};

use crate::reader::GeneratedText;
use crate::settings::UserSettings;
use crate::vocab::VocabItem;

/// The single persisted state blob
///
/// Written in full on every mutation and read once at startup. Timestamps
/// inside are integer epoch milliseconds so other implementations can read
/// the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub vocab: Vec<VocabItem>,
    #[serde(default)]
    pub current_text: Option<GeneratedText>,
}
