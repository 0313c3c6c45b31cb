//! Provider selection based on configured credentials

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Supported embedding/generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// OpenAI (embeddings + chat completions)
    OpenAi,
    /// Google Generative AI (embeddings + Gemini generation)
    Google,
}

impl ProviderKind {
    /// Get the display name for this provider
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Google => "Google Generative AI",
        }
    }

    /// Select a provider from the credentials that are actually configured.
    ///
    /// OpenAI wins when both keys are present. Blank or whitespace-only keys
    /// count as absent. With neither key configured there is nothing to talk
    /// to, so selection fails with a configuration error.
    pub fn from_credentials(
        openai_key: Option<&str>,
        google_key: Option<&str>,
    ) -> Result<ProviderKind> {
        let has_openai = openai_key.is_some_and(|k| !k.trim().is_empty());
        let has_google = google_key.is_some_and(|k| !k.trim().is_empty());

        match (has_openai, has_google) {
            (true, _) => Ok(ProviderKind::OpenAi),
            (false, true) => Ok(ProviderKind::Google),
            (false, false) => Err(Error::Configuration(
                "No API key configured. Set OPENAI_API_KEY or GOOGLE_API_KEY in the .env file"
                    .to_string(),
            )),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
