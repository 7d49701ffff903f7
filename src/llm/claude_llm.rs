use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::completion_interface::CompletionProvider;
use super::error::ProviderError;
use super::endpoint;
use crate::config_manager::CompletionSettings;
use crate::translate::PromptPair;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude LLM implementation using the Messages API.
/// The system prompt travels as the top-level `system` field.
pub struct ClaudeLLM {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ClaudeLLM {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        info!("Initialized ClaudeLLM: base_url={}", base_url);
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionProvider for ClaudeLLM {
    fn name(&self) -> &str {
        "claude"
    }

    async fn complete(
        &self,
        prompts: &PromptPair,
        settings: &CompletionSettings,
    ) -> Result<String, ProviderError> {
        let url = endpoint(&self.base_url, "messages");
        let body = MessagesRequest {
            model: &settings.model,
            system: &prompts.system_prompt,
            messages: [UserMessage {
                role: "user",
                content: &prompts.user_prompt,
            }],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };

        debug!("POST {} model={}", url, settings.model);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_response(status.as_u16(), &text));
        }

        let message: MessagesResponse = response.json().await?;
        message
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| ProviderError::other("Response contained no text block"))
    }
}
