use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the front-end page and script
    #[serde(rename = "static_dir")]
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(rename = "body_limit_bytes")]
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_body_limit_bytes() -> usize {
    10 * 1024 * 1024
}

impl SystemConfig {
    pub fn static_path(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}
