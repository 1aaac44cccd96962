use async_trait::async_trait;

use crate::domain::Document;

/// Produces a best-effort plain-text rendition of an uploaded document.
///
/// Implementations prioritize "always produce some text" over fidelity:
/// the output feeds a language model that tolerates noisy input.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no file content: {0}")]
    EmptyFile(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
