//! In-memory vector store

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use docchat_core::{ChunkRecord, Error, Result, SearchConfig, SearchResult, VectorStore};

/// In-memory vector store with the same contract as the pgvector store.
///
/// Used by the test suite; also works as a throwaway backend when no
/// database is around.
pub struct InMemoryVectorStore {
    chunks: Arc<RwLock<Vec<ChunkRecord>>>,
    connected: bool,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            chunks: Arc::new(RwLock::new(Vec::new())),
            connected: false,
        }
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    async fn replace_collection(&self, entries: Vec<ChunkRecord>) -> Result<usize> {
        let mut chunks = self
            .chunks
            .write()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;

        let stored = entries.len();
        chunks.clear();
        chunks.extend(entries);
        Ok(stored)
    }

    async fn search_by_vector(
        &self,
        vector: &[f32],
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        let chunks = self
            .chunks
            .read()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;

        let mut results: Vec<ChunkRecord> = chunks
            .iter()
            .filter_map(|chunk| {
                chunk.embedding.as_ref().map(|embedding| {
                    let mut scored = chunk.clone();
                    scored.score = Some(Self::cosine_similarity(vector, embedding));
                    scored
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .unwrap_or(0.0)
                .partial_cmp(&a.score.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(config.top_k);

        let total = results.len();
        Ok(SearchResult {
            chunks: results,
            total,
        })
    }

    async fn count(&self) -> Result<usize> {
        let chunks = self
            .chunks
            .read()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;
        Ok(chunks.len())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
