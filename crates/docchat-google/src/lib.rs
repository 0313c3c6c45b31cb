//! Google Generative AI integration for DocChat
//!
//! This crate provides the Google implementation of the EmbeddingProvider
//! and LlmProvider traits over the Generative Language REST API.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::GoogleClient;
pub use config::GoogleConfig;

// Re-export core types for convenience
pub use docchat_core::{
    EmbeddingProvider, Error, GenerationConfig, GenerationResult, LlmProvider, Result,
};
