use async_trait::async_trait;

use super::error::ProviderError;
use crate::config_manager::CompletionSettings;
use crate::translate::PromptPair;

/// Interface for a completion provider.
/// Each call is a single, independent system + user exchange; nothing is remembered.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short vendor name for logs
    fn name(&self) -> &str;

    /// Send both prompts and return the text of the first completion choice
    async fn complete(
        &self,
        prompts: &PromptPair,
        settings: &CompletionSettings,
    ) -> Result<String, ProviderError>;
}
