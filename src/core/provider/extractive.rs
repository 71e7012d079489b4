//! Extractive generation fallback.
//!
//! Answers by quoting the highest-ranked retrieved context instead
//! of calling a language model. Used when no API-backed generation
//! provider is configured.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::provider::GenerationProvider;

/// Maximum characters of context quoted in the answer
const SNIPPET_LIMIT: usize = 700;

/// Offline generation provider that extracts from context.
pub struct ExtractiveGenerator;

impl ExtractiveGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExtractiveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationProvider for ExtractiveGenerator {
    fn name(&self) -> &str {
        "extractive"
    }

    async fn generate(&self, question: &str, context: &str) -> Result<String> {
        let snippet = truncate_chars(context.trim(), SNIPPET_LIMIT);

        Ok(format!(
            "Most relevant indexed material for \"{question}\":\n\n{snippet}"
        ))
    }
}

/// Truncate on a character boundary, appending an ellipsis if cut.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}…", &text[..byte_idx]),
        None => text.to_string(),
    }
}
