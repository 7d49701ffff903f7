use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::config_manager::llm::LLMConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translation::TranslationConfig;

/// Files probed, in order, when `CONFIG_PATH` is not set
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["conf.yaml", "conf.json"];

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "translation_config")]
    #[serde(default)]
    pub translation_config: TranslationConfig,

    #[serde(rename = "llm_config")]
    #[serde(default)]
    pub llm_config: LLMConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::read_config;
        read_config(path)
    }

    /// Locate and load the configuration, then apply environment overrides.
    ///
    /// Returns the path the configuration came from, or `None` when built-in
    /// defaults were used.
    pub fn discover() -> anyhow::Result<(Self, Option<String>)> {
        let (mut config, loaded_from) = match std::env::var("CONFIG_PATH").ok() {
            Some(path) => (Self::load(&path)?, Some(path)),
            None => {
                let found = DEFAULT_CONFIG_PATHS
                    .iter()
                    .find(|path| Path::new(path).exists());
                match found {
                    Some(path) => (Self::load(path)?, Some(path.to_string())),
                    None => {
                        debug!("No configuration file found, using defaults");
                        (Self::default(), None)
                    }
                }
            }
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.llm_config.validate()?;
        Ok((config, loaded_from))
    }

    /// Apply `PORT`, `LLM_PROVIDER` and `LLM_MODEL` from the environment
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.system_config.port = port,
                Err(_) => warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Some(provider) = lookup("LLM_PROVIDER").filter(|p| !p.trim().is_empty()) {
            self.llm_config.llm_provider = provider.trim().to_string();
        }
        if let Some(model) = lookup("LLM_MODEL").filter(|m| !m.trim().is_empty()) {
            self.llm_config.model = Some(model.trim().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_replaces_default() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| (name == "PORT").then(|| "8081".to_string()));
        assert_eq!(config.system_config.port, 8081);
    }

    #[test]
    fn invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| (name == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.system_config.port, 3000);
    }

    #[test]
    fn provider_and_model_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| match name {
            "LLM_PROVIDER" => Some("groq_llm".to_string()),
            "LLM_MODEL" => Some("llama-3.3-70b-versatile".to_string()),
            _ => None,
        });
        assert_eq!(config.llm_config.llm_provider, "groq_llm");
        assert_eq!(config.llm_config.model.as_deref(), Some("llama-3.3-70b-versatile"));
    }
}
