use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::Document;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-layer extraction for PDFs. Parsing is CPU-bound, so it runs on the
/// blocking pool with a timeout. A PDF with no text layer yields an empty
/// string rather than an error.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        let bytes = data.to_vec();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| ExtractionError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
