//! Google Generative AI client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use docchat_core::{
    EmbeddingProvider, Error, GenerationConfig, GenerationResult, LlmProvider, Result,
};

use crate::config::GoogleConfig;

/// Google Generative AI client implementing both embedding and generation
pub struct GoogleClient {
    config: GoogleConfig,
    client: Client,
}

#[derive(Serialize)]
struct ContentPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
struct EmbedContentRequest<'a> {
    model: &'a str,
    content: Content<'a>,
}

#[derive(Serialize)]
struct BatchEmbedRequest<'a> {
    requests: Vec<EmbedContentRequest<'a>>,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct BatchEmbedResponse {
    embeddings: Vec<EmbeddingValues>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerateContentConfig,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct UsageMetadata {
    #[serde(rename = "totalTokenCount")]
    total_token_count: Option<u32>,
}

impl GoogleClient {
    /// Create a new Google client from configuration
    pub fn new(config: GoogleConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new Google client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = GoogleConfig::from_env()?;
        Self::new(config)
    }

    fn endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{}/{}:{}?key={}",
            self.config.api_base, model, operation, self.config.api_key
        )
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

        if status == reqwest::StatusCode::FORBIDDEN || status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication(format!(
                "Google rejected the API key: {}",
                body
            )));
        }

        Err(Error::LlmProvider(format!(
            "Google {} request failed with status {}: {}",
            what, status, body
        )))
    }

    async fn perform_generation(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![ContentPart { text: prompt }],
            }],
            generation_config: GenerateContentConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
            },
        };

        let url = self.endpoint(&config.model_id, "generateContent");
        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Self::check_status(response, "generateContent").await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let tokens_used = parsed
            .usage_metadata
            .and_then(|u| u.total_token_count);

        let text: String = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::LlmProvider(
                "Google response contained no candidate text".to_string(),
            ));
        }

        Ok(GenerationResult {
            text,
            model_id: config.model_id.clone(),
            tokens_used,
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
impl EmbeddingProvider for GoogleClient {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request_body = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| EmbedContentRequest {
                    model: &self.config.embedding_model,
                    content: Content {
                        parts: vec![ContentPart { text }],
                    },
                })
                .collect(),
        };

        let url = self.endpoint(&self.config.embedding_model, "batchEmbedContents");
        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Self::check_status(response, "batchEmbedContents")
            .await
            .map_err(|e| match e {
                Error::LlmProvider(msg) => Error::Embedding(msg),
                other => other,
            })?;

        let parsed: BatchEmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        if parsed.embeddings.len() != texts.len() {
            return Err(Error::Embedding(format!(
                "Google returned {} embeddings for {} inputs",
                parsed.embeddings.len(),
                texts.len()
            )));
        }

        Ok(parsed.embeddings.into_iter().map(|e| e.values).collect())
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let request_body = EmbedContentRequest {
            model: &self.config.embedding_model,
            content: Content {
                parts: vec![ContentPart { text }],
            },
        };

        let url = self.endpoint(&self.config.embedding_model, "embedContent");
        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Self::check_status(response, "embedContent")
            .await
            .map_err(|e| match e {
                Error::LlmProvider(msg) => Error::Embedding(msg),
                other => other,
            })?;

        let parsed: EmbedContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        Ok(parsed.embedding.values)
    }

    fn model_id(&self) -> &str {
        &self.config.embedding_model
    }
}

#[async_trait]
impl LlmProvider for GoogleClient {
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
            Err(_) => Err(Error::Timeout("Google request timed out".to_string())),
        }
    }

    fn model_id(&self) -> &str {
        &self.config.chat_model
    }
}
