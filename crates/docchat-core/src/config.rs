//! Application configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::{Error, Result};

/// Configuration for the whole application, read once at startup.
///
/// Every value is optional at load time; each entry point demands the subset
/// it needs through the `require_*` accessors, so a chat session does not
/// fail over a missing `PDF_PATH` and vice versa.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub pdf_path: Option<String>,
    pub database_url: Option<String>,
    pub collection_name: Option<String>,
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub openai_embedding_model: Option<String>,
    pub google_embedding_model: Option<String>,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// The caller is expected to have loaded `.env` (via `dotenvy`) first.
    pub fn from_env() -> Self {
        Self {
            pdf_path: read_var("PDF_PATH"),
            database_url: read_var("DATABASE_URL"),
            collection_name: read_var("PG_VECTOR_COLLECTION_NAME"),
            openai_api_key: read_var("OPENAI_API_KEY"),
            google_api_key: read_var("GOOGLE_API_KEY"),
            openai_embedding_model: read_var("OPENAI_EMBEDDING_MODEL"),
            google_embedding_model: read_var("GOOGLE_EMBEDDING_MODEL"),
        }
    }

    pub fn require_pdf_path(&self) -> Result<&str> {
        self.pdf_path
            .as_deref()
            .ok_or_else(|| missing("PDF_PATH"))
    }

    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| missing("DATABASE_URL"))
    }

    pub fn require_collection_name(&self) -> Result<&str> {
        self.collection_name
            .as_deref()
            .ok_or_else(|| missing("PG_VECTOR_COLLECTION_NAME"))
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn missing(name: &str) -> Error {
    Error::Configuration(format!("{} not set in the .env file", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accessors_report_the_missing_variable() {
        let config = AppConfig::default();

        let err = config.require_pdf_path().unwrap_err();
        assert!(err.to_string().contains("PDF_PATH"));

        let err = config.require_database_url().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));

        let err = config.require_collection_name().unwrap_err();
        assert!(err.to_string().contains("PG_VECTOR_COLLECTION_NAME"));
    }

    #[test]
    fn require_accessors_return_configured_values() {
        let config = AppConfig {
            pdf_path: Some("document.pdf".to_string()),
            database_url: Some("postgresql://localhost/rag".to_string()),
            collection_name: Some("pdf_chunks".to_string()),
            ..Default::default()
        };

        assert_eq!(config.require_pdf_path().unwrap(), "document.pdf");
        assert_eq!(
            config.require_database_url().unwrap(),
            "postgresql://localhost/rag"
        );
        assert_eq!(config.require_collection_name().unwrap(), "pdf_chunks");
    }
}
