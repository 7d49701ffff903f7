use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config_manager::{ProviderConfig, ProviderKind};
use crate::llm::claude_llm::ClaudeLLM;
use crate::llm::completion_interface::CompletionProvider;
use crate::llm::openai_compatible_llm::OpenAICompatibleLLM;

/// Factory for creating completion provider instances
pub struct CompletionProviderFactory;

impl CompletionProviderFactory {
    /// Create a provider for the configured vendor.
    ///
    /// # Arguments
    /// * `config` - Resolved provider configuration
    /// * `api_key` - Credential for the vendor
    pub fn create_provider(
        config: &ProviderConfig,
        api_key: &str,
    ) -> Result<Arc<dyn CompletionProvider>> {
        info!("Initializing completion provider: {}", config.kind.label());

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        match config.kind {
            ProviderKind::OpenAI
            | ProviderKind::OpenAICompatible
            | ProviderKind::DeepSeek
            | ProviderKind::Groq => Ok(Arc::new(OpenAICompatibleLLM::new(
                client,
                config.base_url.clone(),
                api_key.to_string(),
            ))),
            ProviderKind::Claude => Ok(Arc::new(ClaudeLLM::new(
                client,
                config.base_url.clone(),
                api_key.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_manager::LLMConfig;

    #[test]
    fn picks_adapter_by_provider_kind() {
        let openai = LLMConfig::default().resolve(|_| None).unwrap();
        let provider = CompletionProviderFactory::create_provider(&openai, "k").unwrap();
        assert_eq!(provider.name(), "openai_compatible");

        let groq = LLMConfig {
            llm_provider: "groq_llm".to_string(),
            ..LLMConfig::default()
        }
        .resolve(|_| None)
        .unwrap();
        let provider = CompletionProviderFactory::create_provider(&groq, "k").unwrap();
        assert_eq!(provider.name(), "openai_compatible");

        let claude = LLMConfig {
            llm_provider: "claude_llm".to_string(),
            ..LLMConfig::default()
        }
        .resolve(|_| None)
        .unwrap();
        let provider = CompletionProviderFactory::create_provider(&claude, "k").unwrap();
        assert_eq!(provider.name(), "claude");
    }
}
