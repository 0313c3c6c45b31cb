//! Embedding provider trait

use async_trait::async_trait;

use crate::Result;

/// Trait for embedding providers
///
/// Document and query embedding are separate operations because some
/// backends batch the former and apply a different task type to the latter.
/// Vectors come back in the same order as the input texts.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of document texts
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single query
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;

    /// Get the embedding model ID being used
    fn model_id(&self) -> &str;
}
