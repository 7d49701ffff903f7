use serde::{Deserialize, Serialize};

/// Language pair used when rendering the translator persona
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(rename = "source_language")]
    #[serde(default = "default_source_language")]
    pub source_language: String,

    #[serde(rename = "target_language")]
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_source_language() -> String {
    "Inglês".to_string()
}

fn default_target_language() -> String {
    "Português".to_string()
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}
