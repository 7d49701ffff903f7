use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config_manager::{CompletionSettings, ProviderConfig};
use crate::llm::{CompletionProvider, CompletionProviderFactory, ProviderError, ProviderErrorKind};
use crate::translate::prompt::PromptPair;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("completion provider credential is not configured")]
    Unconfigured,
    #[error("completion provider rejected the credential: {0}")]
    AuthFailed(String),
    #[error("completion provider quota exhausted: {0}")]
    QuotaExceeded(String),
    #[error("completion model not found: {0}")]
    ModelNotFound(String),
    #[error("completion provider error: {0}")]
    Upstream(String),
}

impl From<ProviderError> for DispatchError {
    fn from(err: ProviderError) -> Self {
        match err.kind {
            ProviderErrorKind::Auth => Self::AuthFailed(err.message),
            ProviderErrorKind::Quota => Self::QuotaExceeded(err.message),
            ProviderErrorKind::ModelNotFound => Self::ModelNotFound(err.message),
            ProviderErrorKind::Other => Self::Upstream(err.message),
        }
    }
}

/// Sends prompt pairs to the configured provider, one attempt per call
pub struct CompletionDispatcher {
    label: String,
    provider: Option<Arc<dyn CompletionProvider>>,
    settings: CompletionSettings,
}

impl CompletionDispatcher {
    pub fn new(
        label: impl Into<String>,
        provider: Arc<dyn CompletionProvider>,
        settings: CompletionSettings,
    ) -> Self {
        Self {
            label: label.into(),
            provider: Some(provider),
            settings,
        }
    }

    /// A dispatcher with no credential; every dispatch fails with `Unconfigured`
    pub fn unconfigured(label: impl Into<String>, settings: CompletionSettings) -> Self {
        Self {
            label: label.into(),
            provider: None,
            settings,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        let label = config.kind.label();
        match config.api_key.as_deref() {
            Some(api_key) => {
                let provider = CompletionProviderFactory::create_provider(config, api_key)?;
                Ok(Self::new(label, provider, config.settings.clone()))
            }
            None => {
                warn!("No credential for {} provider, translations will be refused", label);
                Ok(Self::unconfigured(label, config.settings.clone()))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Provider label, e.g. `openai`
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Run one completion and return the trimmed text of the first choice
    pub async fn dispatch(&self, prompts: &PromptPair) -> Result<String, DispatchError> {
        let provider = self.provider.as_ref().ok_or(DispatchError::Unconfigured)?;

        let text = provider.complete(prompts, &self.settings).await?;
        info!(
            "{} completion finished: model={}, chars={}",
            provider.name(),
            self.settings.model,
            text.chars().count()
        );
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        reply: Result<String, ProviderError>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(reply: Result<String, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            _prompts: &PromptPair,
            _settings: &CompletionSettings,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn settings() -> CompletionSettings {
        CompletionSettings {
            model: "stub-model".to_string(),
            temperature: 0.2,
            max_tokens: 2000,
        }
    }

    fn prompts() -> PromptPair {
        PromptPair {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_trimmed_completion() {
        let stub = StubProvider::new(Ok("  \nOlá, mundo.\n ".to_string()));
        let dispatcher = CompletionDispatcher::new("stub", stub.clone(), settings());

        assert_eq!(dispatcher.dispatch(&prompts()).await.unwrap(), "Olá, mundo.");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unconfigured_dispatcher_never_calls_out() {
        let dispatcher = CompletionDispatcher::unconfigured("openai", settings());
        assert!(!dispatcher.is_configured());
        assert_eq!(
            dispatcher.dispatch(&prompts()).await.unwrap_err(),
            DispatchError::Unconfigured
        );
    }

    #[tokio::test]
    async fn provider_error_kinds_are_preserved() {
        let cases = [
            (ProviderErrorKind::Auth, DispatchError::AuthFailed("boom".to_string())),
            (ProviderErrorKind::Quota, DispatchError::QuotaExceeded("boom".to_string())),
            (ProviderErrorKind::ModelNotFound, DispatchError::ModelNotFound("boom".to_string())),
            (ProviderErrorKind::Other, DispatchError::Upstream("boom".to_string())),
        ];
        for (kind, expected) in cases {
            let stub = StubProvider::new(Err(ProviderError::new(kind, "boom")));
            let dispatcher = CompletionDispatcher::new("stub", stub.clone(), settings());
            assert_eq!(dispatcher.dispatch(&prompts()).await.unwrap_err(), expected);
            assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn missing_credential_builds_unconfigured_dispatcher() {
        let config = crate::config_manager::LLMConfig::default()
            .resolve(|_| None)
            .unwrap();
        let dispatcher = CompletionDispatcher::from_config(&config).unwrap();
        assert!(!dispatcher.is_configured());
        assert_eq!(dispatcher.label(), "openai");
        assert_eq!(dispatcher.settings().model, "gpt-4.1-mini");
    }

    #[test]
    fn credential_builds_configured_dispatcher() {
        let config = crate::config_manager::LLMConfig::default()
            .resolve(|name| (name == "OPENAI_API_KEY").then(|| "sk-test".to_string()))
            .unwrap();
        let dispatcher = CompletionDispatcher::from_config(&config).unwrap();
        assert!(dispatcher.is_configured());
    }
}
