//! Vector store trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A chunk stored in (or retrieved from) the vector store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: String,
    pub content: String,
    pub embedding: Option<Vec<f32>>,
    pub metadata: serde_json::Value,
    pub score: Option<f32>,
}

/// Configuration for similarity search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_k: 10 }
    }
}

/// Search result from the vector store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub chunks: Vec<ChunkRecord>,
    pub total: usize,
}

/// Trait for vector stores (e.g., pgvector, in-memory)
///
/// A store instance is bound to exactly one named collection at construction
/// time. `replace_collection` must leave the collection either untouched or
/// fully replaced, never half-populated; a missing prior collection is not
/// an error.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Initialize the vector store connection
    async fn connect(&mut self) -> Result<()>;

    /// Drop the bound collection's previous contents and store all entries.
    /// Returns the number of entries stored.
    async fn replace_collection(&self, entries: Vec<ChunkRecord>) -> Result<usize>;

    /// Search the bound collection for the chunks most similar to a vector,
    /// ranked by descending similarity. An empty collection yields an empty
    /// result.
    async fn search_by_vector(
        &self,
        vector: &[f32],
        config: &SearchConfig,
    ) -> Result<SearchResult>;

    /// Get the number of chunks in the bound collection
    async fn count(&self) -> Result<usize>;

    /// Check if the vector store is connected
    fn is_connected(&self) -> bool;
}
