use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::completion::API_KEY_ENV;
use crate::error::SummarizeError;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_lang: Option<String>,
    pub default_model: Option<String>,
    pub api_url: Option<String>,
    pub max_transcript_chars: Option<usize>,
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// API key from the environment, falling back to the config file
    pub fn api_key(&self) -> Result<String, SummarizeError> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<&str>) -> Result<String, SummarizeError> {
    from_env
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .or_else(|| from_file.map(str::trim).filter(|key| !key.is_empty()).map(str::to_string))
        .ok_or_else(|| SummarizeError::ConfigurationMissing {
            env_var: API_KEY_ENV.to_string(),
        })
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}
