//! Ingestion pipeline: PDF into a vector collection

use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use docchat_core::{
    Chunk, ChunkRecord, DocumentPage, EmbeddingProvider, Error, Result, SplitConfig, VectorStore,
};

use crate::loader::PdfLoader;
use crate::splitter::TextSplitter;

/// Outcome of one ingestion run
#[derive(Debug, Clone)]
pub struct IngestionReport {
    pub pages: usize,
    pub chunks: usize,
    pub stored: usize,
}

/// Loads a PDF, splits it into overlapping windows, embeds the windows and
/// replaces the bound collection with the result.
///
/// Any stage failure aborts the run; the store contract guarantees the
/// collection is left either untouched or fully replaced. Re-running over
/// the same input produces the same chunks with no residue from the
/// previous run.
pub struct IngestionPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    split: SplitConfig,
}

impl IngestionPipeline {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self {
            embedder,
            store,
            split: SplitConfig::default(),
        }
    }

    /// Override the split configuration
    pub fn with_split_config(mut self, split: SplitConfig) -> Self {
        self.split = split;
        self
    }

    /// Load the PDF at `path` and ingest it
    pub async fn run(&self, path: impl AsRef<Path>) -> Result<IngestionReport> {
        let path = path.as_ref();
        let pages = PdfLoader::load(path)?;
        self.ingest_pages(&pages, &path.display().to_string()).await
    }

    /// Ingest already-loaded pages. `source` ends up in the chunk metadata.
    pub async fn ingest_pages(
        &self,
        pages: &[DocumentPage],
        source: &str,
    ) -> Result<IngestionReport> {
        if !self.store.is_connected() {
            return Err(Error::VectorStore("Vector store not connected".to_string()));
        }

        let splitter = TextSplitter::new(self.split)?;
        let chunks = splitter.split_pages(pages);

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let vectors = self.embedder.embed_documents(&texts).await?;

        if vectors.len() != chunks.len() {
            return Err(Error::Embedding(format!(
                "embedding provider returned {} vectors for {} chunks",
                vectors.len(),
                chunks.len()
            )));
        }

        let ingested_at = chrono::Utc::now().to_rfc3339();
        let total_chunks = chunks.len();
        let entries: Vec<ChunkRecord> = chunks
            .into_iter()
            .zip(vectors)
            .map(|(chunk, vector)| self.to_record(chunk, vector, source, total_chunks, &ingested_at))
            .collect();

        let stored = self.store.replace_collection(entries).await?;

        Ok(IngestionReport {
            pages: pages.len(),
            chunks: total_chunks,
            stored,
        })
    }

    fn to_record(
        &self,
        chunk: Chunk,
        vector: Vec<f32>,
        source: &str,
        total_chunks: usize,
        ingested_at: &str,
    ) -> ChunkRecord {
        ChunkRecord {
            id: Uuid::new_v4().to_string(),
            content: chunk.content,
            embedding: Some(vector),
            metadata: json!({
                "source": source,
                "page": chunk.page,
                "chunk_index": chunk.index,
                "total_chunks": total_chunks,
                "ingested_at": ingested_at,
            }),
            score: None,
        }
    }
}
