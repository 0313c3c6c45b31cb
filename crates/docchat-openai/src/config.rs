//! OpenAI configuration

use serde::{Deserialize, Serialize};
use std::env;

use docchat_core::{AppConfig, Error, Result};

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub api_base: String,
}

impl OpenAiConfig {
    /// Create configuration with explicit key and default models
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create configuration from the application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config.openai_api_key.clone().ok_or_else(|| {
            Error::Configuration("OPENAI_API_KEY not set in the .env file".to_string())
        })?;

        let mut cfg = Self::new(api_key);
        if let Some(model) = &config.openai_embedding_model {
            cfg.embedding_model = model.clone();
        }
        Ok(cfg)
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Configuration("OPENAI_API_KEY environment variable not found".to_string())
        })?;

        let mut cfg = Self::new(api_key);
        if let Ok(model) = env::var("OPENAI_EMBEDDING_MODEL") {
            if !model.trim().is_empty() {
                cfg.embedding_model = model;
            }
        }
        Ok(cfg)
    }

    /// Override the embedding model
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Override the chat model
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }
}
