//! PostgreSQL + pgvector store

use async_trait::async_trait;
use pgvector::Vector;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use docchat_core::{ChunkRecord, Error, Result, SearchConfig, SearchResult, VectorStore};

/// Vector store backed by a pgvector column in PostgreSQL.
///
/// All rows live in one `document_chunks` table keyed by a `collection`
/// column; an instance is bound to a single collection name. The `embedding`
/// column is declared without a fixed dimension so the same table serves
/// either provider's model.
pub struct PgVectorStore {
    database_url: String,
    collection: String,
    pool: Option<PgPool>,
}

impl PgVectorStore {
    /// Create a store bound to one collection. No I/O happens until
    /// `connect` is called.
    pub fn new(database_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            collection: collection.into(),
            pool: None,
        }
    }

    /// The collection this store is bound to
    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn pool(&self) -> Result<&PgPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| Error::VectorStore("Not connected. Call connect() first.".to_string()))
    }

    async fn ensure_schema(pool: &PgPool) -> Result<()> {
        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(pool)
            .await
            .map_err(store_err)?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS document_chunks (
                 id UUID PRIMARY KEY,
                 collection TEXT NOT NULL,
                 content TEXT NOT NULL,
                 embedding vector NOT NULL,
                 metadata JSONB NOT NULL DEFAULT '{}'::jsonb,
                 ingested_at TIMESTAMPTZ NOT NULL DEFAULT now()
             )",
        )
        .execute(pool)
        .await
        .map_err(store_err)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS document_chunks_collection_idx
                 ON document_chunks (collection)",
        )
        .execute(pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }
}

fn store_err(e: sqlx::Error) -> Error {
    Error::VectorStore(e.to_string())
}

#[async_trait]
impl VectorStore for PgVectorStore {
    async fn connect(&mut self) -> Result<()> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&self.database_url)
            .await
            .map_err(store_err)?;

        Self::ensure_schema(&pool).await?;
        self.pool = Some(pool);
        Ok(())
    }

    /// Delete the previous collection contents and insert all entries in a
    /// single transaction: a failure rolls back to the old contents, so the
    /// caller only ever observes "old collection" or "new collection". A
    /// collection that never existed is a delete of zero rows, not an error.
    async fn replace_collection(&self, entries: Vec<ChunkRecord>) -> Result<usize> {
        let pool = self.pool()?;
        let stored = entries.len();

        let mut tx = pool.begin().await.map_err(store_err)?;

        sqlx::query("DELETE FROM document_chunks WHERE collection = $1")
            .bind(&self.collection)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        for entry in entries {
            let id = Uuid::parse_str(&entry.id)
                .map_err(|e| Error::VectorStore(format!("chunk id is not a UUID: {}", e)))?;
            let embedding = entry.embedding.ok_or_else(|| {
                Error::VectorStore(format!("chunk {} has no embedding", entry.id))
            })?;

            sqlx::query(
                "INSERT INTO document_chunks (id, collection, content, embedding, metadata)
                     VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(&self.collection)
            .bind(&entry.content)
            .bind(Vector::from(embedding))
            .bind(&entry.metadata)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;
        }

        tx.commit().await.map_err(store_err)?;
        Ok(stored)
    }

    async fn search_by_vector(
        &self,
        vector: &[f32],
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        let pool = self.pool()?;
        let query_vector = Vector::from(vector.to_vec());

        let rows = sqlx::query(
            "SELECT id, content, metadata, 1 - (embedding <=> $1) AS score
                 FROM document_chunks
                 WHERE collection = $2
                 ORDER BY embedding <=> $1
                 LIMIT $3",
        )
        .bind(&query_vector)
        .bind(&self.collection)
        .bind(config.top_k as i64)
        .fetch_all(pool)
        .await
        .map_err(store_err)?;

        let chunks: Vec<ChunkRecord> = rows
            .into_iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(store_err)?;
                let content: String = row.try_get("content").map_err(store_err)?;
                let metadata: serde_json::Value = row.try_get("metadata").map_err(store_err)?;
                let score: f64 = row.try_get("score").map_err(store_err)?;

                Ok(ChunkRecord {
                    id: id.to_string(),
                    content,
                    embedding: None,
                    metadata,
                    score: Some(score as f32),
                })
            })
            .collect::<Result<_>>()?;

        let total = chunks.len();
        Ok(SearchResult { chunks, total })
    }

    async fn count(&self) -> Result<usize> {
        let pool = self.pool()?;

        let row = sqlx::query("SELECT COUNT(*) AS total FROM document_chunks WHERE collection = $1")
            .bind(&self.collection)
            .fetch_one(pool)
            .await
            .map_err(store_err)?;

        let total: i64 = row.try_get("total").map_err(store_err)?;
        Ok(total as usize)
    }

    fn is_connected(&self) -> bool {
        self.pool.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_disconnected() {
        let store = PgVectorStore::new("postgresql://localhost/rag", "pdf_chunks");
        assert!(!store.is_connected());
        assert_eq!(store.collection(), "pdf_chunks");
    }

    #[tokio::test]
    async fn operations_before_connect_fail_cleanly() {
        let store = PgVectorStore::new("postgresql://localhost/rag", "pdf_chunks");

        let err = store
            .search_by_vector(&[0.1, 0.2], &SearchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::VectorStore(_)));

        let err = store.count().await.unwrap_err();
        assert!(matches!(err, Error::VectorStore(_)));
    }
}
