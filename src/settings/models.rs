//! Data models for user settings

use serde::{Deserialize, Serialize};

/// CEFR proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum CefrLevel {
    #[default]
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }
}

impl std::fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A1" => Ok(CefrLevel::A1),
            "A2" => Ok(CefrLevel::A2),
            "B1" => Ok(CefrLevel::B1),
            "B2" => Ok(CefrLevel::B2),
            "C1" => Ok(CefrLevel::C1),
            "C2" => Ok(CefrLevel::C2),
            _ => Err(format!("Unknown CEFR level: {}", s)),
        }
    }
}

/// Learner profile and preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub user_name: String,
    pub native_language: String,
    pub target_language: String,
    /// All languages the user is studying; `target_language` is the active one
    #[serde(default)]
    pub target_languages: Vec<String>,
    /// Assessed proficiency level
    #[serde(default)]
    pub level: CefrLevel,
    /// Level the user prefers for generated reading material
    #[serde(default)]
    pub preferred_level: CefrLevel,
    #[serde(default)]
    pub has_onboarded: bool,
    #[serde(default, rename = "optOutAI")]
    pub opt_out_ai: bool,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            native_language: "English".to_string(),
            target_language: "Spanish".to_string(),
            target_languages: vec!["Spanish".to_string()],
            level: CefrLevel::A1,
            preferred_level: CefrLevel::A1,
            has_onboarded: false,
            opt_out_ai: false,
            interests: Vec::new(),
        }
    }
}

/// Partial settings update; only the provided fields are changed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub user_name: Option<String>,
    pub native_language: Option<String>,
    pub target_language: Option<String>,
    pub target_languages: Option<Vec<String>>,
    pub level: Option<CefrLevel>,
    pub preferred_level: Option<CefrLevel>,
    pub has_onboarded: Option<bool>,
    #[serde(rename = "optOutAI")]
    pub opt_out_ai: Option<bool>,
    pub interests: Option<Vec<String>>,
}

impl UserSettings {
    /// Merge a partial update into these settings
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(user_name) = update.user_name {
            self.user_name = user_name;
        }
        if let Some(native_language) = update.native_language {
            self.native_language = native_language;
        }
        if let Some(target_language) = update.target_language {
            self.target_language = target_language;
        }
        if let Some(target_languages) = update.target_languages {
            self.target_languages = target_languages;
        }
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(preferred_level) = update.preferred_level {
            self.preferred_level = preferred_level;
        }
        if let Some(has_onboarded) = update.has_onboarded {
            self.has_onboarded = has_onboarded;
        }
        if let Some(opt_out_ai) = update.opt_out_ai {
            self.opt_out_ai = opt_out_ai;
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
    }
}
