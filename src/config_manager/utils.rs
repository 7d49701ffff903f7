use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read a YAML or JSON configuration file with environment variable substitution
pub fn read_config(config_path: &str) -> Result<Config> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    let content = substitute_env_vars(&content, |name| std::env::var(name).ok())?;
    parse_config(config_path, &content)
}

/// Parse configuration text, choosing the format by file extension
pub fn parse_config(config_path: &str, content: &str) -> Result<Config> {
    let path_lower = config_path.to_lowercase();
    if path_lower.ends_with(".json") {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Replace `${VAR_NAME}` placeholders. Unset variables become empty strings.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| {
            debug!("Environment variable {} is not set", var_name);
            String::new()
        })
    });
    Ok(replaced.into_owned())
}

/// Load text file, honouring a UTF-8 or UTF-16 byte order mark
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;
    let (cow, encoding, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        debug!("{} contained invalid {} sequences", file_path, encoding.name());
    }
    Ok(cow.into_owned())
}
