//! Core traits and types for DocChat
//!
//! This crate defines the fundamental traits and types used across the DocChat
//! system. It provides capability-facing interfaces for embedding providers,
//! LLM providers and vector stores, plus the shared configuration and error
//! types, making the system test-friendly and extensible.

pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod provider;
pub mod vector_store;

pub use config::AppConfig;
pub use document::{Chunk, DocumentPage, SplitConfig};
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
pub use llm::{GenerationConfig, GenerationResult, LlmProvider};
pub use provider::ProviderKind;
pub use vector_store::{ChunkRecord, SearchConfig, SearchResult, VectorStore};
