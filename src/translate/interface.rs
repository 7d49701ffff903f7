/// Wire types for the `/api/translate` endpoint

use serde::{Deserialize, Serialize};

/// Incoming payload. Both fields are optional here so that a missing field
/// is reported by the prompt builder instead of the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            difficulty: Some(difficulty.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
}
