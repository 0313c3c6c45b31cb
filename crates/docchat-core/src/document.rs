//! Document and chunk types

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One page of text extracted from the source document, 1-based numbering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPage {
    pub number: usize,
    pub content: String,
}

/// A bounded text window produced by splitting a page for embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    /// Source page the window was cut from
    pub page: usize,
    /// Position of this chunk within the whole document
    pub index: usize,
}

/// Configuration for chunk splitting
///
/// Both values are measured in characters and fixed by configuration, never
/// derived from the document content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 150,
        }
    }
}

impl SplitConfig {
    /// Validate the invariant overlap < size
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidInput(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::InvalidInput(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_split_config_is_valid() {
        let config = SplitConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 150);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_overlap_not_smaller_than_size() {
        let config = SplitConfig {
            chunk_size: 100,
            chunk_overlap: 100,
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::InvalidInput(_)
        ));

        let config = SplitConfig {
            chunk_size: 100,
            chunk_overlap: 150,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_chunk_size() {
        let config = SplitConfig {
            chunk_size: 0,
            chunk_overlap: 0,
        };
        assert!(config.validate().is_err());
    }
}
