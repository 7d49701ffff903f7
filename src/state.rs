use std::sync::Arc;

use crate::config_manager::Config;
use crate::translate::{CompletionDispatcher, PromptBuilder};

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub prompt_builder: Arc<PromptBuilder>,
    pub dispatcher: Arc<CompletionDispatcher>,
}

impl AppState {
    /// Build state from configuration, reading the provider credential from the environment
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let provider_config = config.llm_config.resolve(|name| std::env::var(name).ok())?;
        let dispatcher = CompletionDispatcher::from_config(&provider_config)?;
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    pub fn with_dispatcher(config: Config, dispatcher: CompletionDispatcher) -> Self {
        let prompt_builder = PromptBuilder::new(&config.translation_config);
        Self {
            config: Arc::new(config),
            prompt_builder: Arc::new(prompt_builder),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
