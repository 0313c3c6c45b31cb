//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use docchat_core::{
    EmbeddingProvider, Error, GenerationConfig, GenerationResult, LlmProvider, Result,
};

use crate::config::OpenAiConfig;

/// OpenAI API client implementing both embedding and generation
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

impl OpenAiClient {
    /// Create a new OpenAI client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new OpenAI client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    async fn check_status(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication(format!(
                "OpenAI rejected the API key: {}",
                body
            )));
        }

        Err(Error::LlmProvider(format!(
            "OpenAI {} request failed with status {}: {}",
            what, status, body
        )))
    }

    async fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request_body = EmbeddingRequest {
            model: &self.config.embedding_model,
            input: texts,
        };

        let url = format!("{}/embeddings", self.config.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Self::check_status(response, "embeddings")
            .await
            .map_err(|e| match e {
                Error::LlmProvider(msg) => Error::Embedding(msg),
                other => other,
            })?;

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        if parsed.data.len() != texts.len() {
            return Err(Error::Embedding(format!(
                "OpenAI returned {} embeddings for {} inputs",
                parsed.data.len(),
                texts.len()
            )));
        }

        // The API may return entries out of order; `index` is authoritative.
        let mut data = parsed.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    async fn perform_generation(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let request_body = ChatRequest {
            model: &config.model_id,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Self::check_status(response, "chat completion").await?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                Error::LlmProvider("OpenAI response contained no message content".to_string())
            })?;

        Ok(GenerationResult {
            text,
            model_id: config.model_id.clone(),
            tokens_used: parsed.usage.map(|u| u.total_tokens),
        })
    }

    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            model_id: self.config.chat_model.clone(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.request_embeddings(texts).await
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.request_embeddings(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| Error::Embedding("OpenAI returned no embedding".to_string()))
    }

    fn model_id(&self) -> &str {
        &self.config.embedding_model
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let config = self.generation_config();
        self.generate_with_config(prompt, &config).await
    }

    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let generation_future = self.perform_generation(prompt, config);

        match timeout(config.timeout, generation_future).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("OpenAI request timed out".to_string())),
        }
    }

    fn model_id(&self) -> &str {
        &self.config.chat_model
    }
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn embedding_response_entries_are_reordered_by_index() {
        let raw = r#"{
            "data": [
                {"index": 1, "embedding": [0.5, 0.5]},
                {"index": 0, "embedding": [0.1, 0.2]}
            ]
        }"#;

        let mut parsed: EmbeddingResponse = serde_json::from_str(raw).unwrap();
        parsed.data.sort_by_key(|d| d.index);

        assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2]);
        assert_eq!(parsed.data[1].embedding, vec![0.5, 0.5]);
    }

    #[test]
    fn chat_response_extracts_first_choice_content() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "The sky is blue."}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.usage.as_ref().map(|u| u.total_tokens), Some(15));

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap();
        assert_eq!(text, "The sky is blue.");
    }

    #[test]
    fn chat_request_serializes_expected_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "CONTEXTO:\n...\n",
            }],
            temperature: 0.0,
            max_tokens: 1024,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["messages"][0]["role"], "user");
    }
}
