//! OpenAI integration for DocChat
//!
//! This crate provides the OpenAI implementation of the EmbeddingProvider
//! and LlmProvider traits.

mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use docchat_core::{
    EmbeddingProvider, Error, GenerationConfig, GenerationResult, LlmProvider, Result,
};
