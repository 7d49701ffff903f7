use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::completion_interface::CompletionProvider;
use super::error::ProviderError;
use super::endpoint;
use crate::config_manager::CompletionSettings;
use crate::translate::PromptPair;

/// OpenAI compatible chat completions client.
/// Also serves DeepSeek, Groq and any other `/chat/completions` endpoint.
pub struct OpenAICompatibleLLM {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAICompatibleLLM {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        info!("Initialized OpenAICompatibleLLM: base_url={}", base_url);
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompatibleLLM {
    fn name(&self) -> &str {
        "openai_compatible"
    }

    async fn complete(
        &self,
        prompts: &PromptPair,
        settings: &CompletionSettings,
    ) -> Result<String, ProviderError> {
        let url = endpoint(&self.base_url, "chat/completions");
        let body = ChatCompletionRequest {
            model: &settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompts.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user_prompt,
                },
            ],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };

        debug!("POST {} model={}", url, settings.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_response(status.as_u16(), &text));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::other("Response contained no completion choice"))
    }
}
