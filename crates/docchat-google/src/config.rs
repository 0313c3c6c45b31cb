//! Google Generative AI configuration

use serde::{Deserialize, Serialize};
use std::env;

use docchat_core::{AppConfig, Error, Result};

pub const DEFAULT_EMBEDDING_MODEL: &str = "models/embedding-001";
pub const DEFAULT_CHAT_MODEL: &str = "models/gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Google Generative AI client
///
/// Model names carry the API's `models/` prefix because they are spliced
/// directly into request paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub api_base: String,
}

impl GoogleConfig {
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
        let api_key = config.google_api_key.clone().ok_or_else(|| {
            Error::Configuration("GOOGLE_API_KEY not set in the .env file".to_string())
        })?;

        let mut cfg = Self::new(api_key);
        if let Some(model) = &config.google_embedding_model {
            cfg.embedding_model = model.clone();
        }
        Ok(cfg)
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GOOGLE_API_KEY").map_err(|_| {
            Error::Configuration("GOOGLE_API_KEY environment variable not found".to_string())
        })?;

        let mut cfg = Self::new(api_key);
        if let Ok(model) = env::var("GOOGLE_EMBEDDING_MODEL") {
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
