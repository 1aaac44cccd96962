use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::Document;

use super::lossy_utf8_text;

/// Handles plain text, markdown, CSV, and the unrecognized-format fallback:
/// a verbatim UTF-8 decode that substitutes malformed sequences instead of
/// failing. CSV is deliberately not parsed into rows.
pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<String, ExtractionError> {
        Ok(lossy_utf8_text(data))
    }
}
