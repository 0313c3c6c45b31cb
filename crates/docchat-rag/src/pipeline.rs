//! Retrieval-generation pipeline

use std::sync::Arc;

use docchat_core::{
    ChunkRecord, EmbeddingProvider, GenerationConfig, LlmProvider, Result, SearchConfig,
    VectorStore,
};

use crate::prompt::render_prompt;

/// Reusable question-answering pipeline bound to one collection, one
/// embedding provider, one generation provider and the fixed prompt
/// template.
///
/// Every invocation re-embeds the question and re-queries the store; there
/// is no cache and no conversation state.
pub struct AnswerPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    store: Arc<dyn VectorStore>,
    search: SearchConfig,
    generation: GenerationConfig,
}

impl AnswerPipeline {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
        store: Arc<dyn VectorStore>,
    ) -> Self {
        let generation = GenerationConfig {
            model_id: llm.model_id().to_string(),
            ..Default::default()
        };

        Self {
            embedder,
            llm,
            store,
            search: SearchConfig::default(),
            generation,
        }
    }

    /// Answer a question from the bound collection.
    ///
    /// Embeds the question, retrieves the most similar chunks, renders the
    /// grounded prompt and returns the model's raw answer text. An empty
    /// collection produces an empty context, not an error.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let query_vector = self.embedder.embed_query(question).await?;
        let retrieved = self
            .store
            .search_by_vector(&query_vector, &self.search)
            .await?;

        let context = Self::build_context(&retrieved.chunks);
        let prompt = render_prompt(&context, question);

        let result = self.llm.generate_with_config(&prompt, &self.generation).await?;
        Ok(result.text)
    }

    /// Concatenate retrieved chunk texts with a separating blank line,
    /// preserving retrieval rank order
    fn build_context(chunks: &[ChunkRecord]) -> String {
        chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(content: &str, score: f32) -> ChunkRecord {
        ChunkRecord {
            id: content.to_string(),
            content: content.to_string(),
            embedding: None,
            metadata: json!({}),
            score: Some(score),
        }
    }

    #[test]
    fn context_preserves_rank_order() {
        let chunks = vec![record("best", 0.9), record("second", 0.5), record("last", 0.1)];
        assert_eq!(
            AnswerPipeline::build_context(&chunks),
            "best\n\nsecond\n\nlast"
        );
    }

    #[test]
    fn empty_retrieval_yields_empty_context() {
        assert_eq!(AnswerPipeline::build_context(&[]), "");
    }
}
