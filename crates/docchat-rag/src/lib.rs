//! RAG pipelines for DocChat
//!
//! This crate provides the document loader, chunk splitter, vector store
//! implementations and the two pipelines: ingestion (PDF into a pgvector
//! collection) and answering (question in, grounded answer out).

mod ingest;
mod loader;
mod memory;
mod pg_store;
mod pipeline;
mod prompt;
mod splitter;


pub use ingest::{IngestionPipeline, IngestionReport};
pub use loader::PdfLoader;
pub use memory::InMemoryVectorStore;
pub use pg_store::PgVectorStore;
pub use pipeline::AnswerPipeline;
pub use prompt::{ANSWER_TEMPLATE, OUT_OF_CONTEXT_ANSWER, render_prompt};
pub use splitter::TextSplitter;

// Re-export core types for convenience
pub use docchat_core::{
    Chunk, ChunkRecord, DocumentPage, EmbeddingProvider, Error, GenerationConfig,
    GenerationResult, LlmProvider, Result, SearchConfig, SearchResult, SplitConfig, VectorStore,
};
