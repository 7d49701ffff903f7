use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Supported completion provider families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAI,
    OpenAICompatible,
    DeepSeek,
    Groq,
    Claude,
}

impl ProviderKind {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "openai_llm" => Some(Self::OpenAI),
            "openai_compatible_llm" => Some(Self::OpenAICompatible),
            "deepseek_llm" => Some(Self::DeepSeek),
            "groq_llm" => Some(Self::Groq),
            "claude_llm" => Some(Self::Claude),
            _ => None,
        }
    }

    /// Name used in the `<label>_configured` health field
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::OpenAICompatible => "llm",
            Self::DeepSeek => "deepseek",
            Self::Groq => "groq",
            Self::Claude => "anthropic",
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::OpenAICompatible => "LLM_API_KEY",
            Self::DeepSeek => "DEEPSEEK_API_KEY",
            Self::Groq => "GROQ_API_KEY",
            Self::Claude => "ANTHROPIC_API_KEY",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAI | Self::OpenAICompatible => "https://api.openai.com/v1",
            Self::DeepSeek => "https://api.deepseek.com/v1",
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::Claude => "https://api.anthropic.com/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAI | Self::OpenAICompatible => "gpt-4.1-mini",
            Self::DeepSeek => "deepseek-chat",
            Self::Groq => "llama-3.1-8b-instant",
            Self::Claude => "claude-3-5-haiku-latest",
        }
    }
}

/// Completion provider section of the configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(rename = "llm_provider")]
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    /// Inline credential; usually left empty in favour of `api_key_env`
    #[serde(rename = "llm_api_key")]
    #[serde(default)]
    pub llm_api_key: Option<String>,

    #[serde(rename = "api_key_env")]
    #[serde(default)]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(rename = "base_url")]
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(rename = "max_tokens")]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(rename = "request_timeout_secs")]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_llm_provider() -> String {
    "openai_llm".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            llm_api_key: None,
            api_key_env: None,
            model: None,
            base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Provider settings resolved once at startup
#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout: Duration,
    pub settings: CompletionSettings,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("settings", &self.settings)
            .finish()
    }
}

impl LLMConfig {
    pub fn provider_kind(&self) -> anyhow::Result<ProviderKind> {
        ProviderKind::from_key(&self.llm_provider)
            .ok_or_else(|| anyhow::anyhow!("Unsupported LLM provider: {}", self.llm_provider))
    }

    /// Name of the environment variable holding the credential
    pub fn api_key_env_name(&self, kind: ProviderKind) -> String {
        self.api_key_env
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| kind.default_api_key_env())
            .to_string()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            anyhow::bail!("temperature must be between 0.0 and 2.0, got {}", self.temperature);
        }
        if self.max_tokens == 0 {
            anyhow::bail!("max_tokens must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Resolve provider settings, reading the credential through `lookup`.
    ///
    /// An inline `llm_api_key` wins over the environment. Blank values count as absent.
    pub fn resolve<F>(&self, lookup: F) -> anyhow::Result<ProviderConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.validate()?;
        let kind = self.provider_kind()?;

        let api_key = self
            .llm_api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env_name(kind)))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let model = self
            .model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| kind.default_model().to_string());

        let base_url = self
            .base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| kind.default_base_url().to_string());

        Ok(ProviderConfig {
            kind,
            api_key,
            base_url,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            settings: CompletionSettings {
                model,
                temperature: self.temperature,
                max_tokens: self.max_tokens,
            },
        })
    }
}
