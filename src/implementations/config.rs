use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::{API_KEY_SETTING, DEFAULT_API_BASE_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the HubSpot CRM API, including the version segment
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Host settings, keyed by setting name (e.g. `HubSpotApiKey`)
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Set the API key setting, replacing any configured value
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.settings.insert(API_KEY_SETTING.to_string(), api_key.into());
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            api_base_url: default_api_base_url(),
            settings: HashMap::new(),
        }
    }
}
