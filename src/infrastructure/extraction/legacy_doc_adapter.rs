use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::Document;

use super::printable_ascii_text;

/// Legacy `.doc` files have no structured parser here; readable strings
/// are pulled straight out of the binary. The output feeds a language
/// model that tolerates noise.
pub struct LegacyDocAdapter;

#[async_trait]
impl TextExtractor for LegacyDocAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        let text = printable_ascii_text(data);
        tracing::debug!(chars = text.len(), "Legacy DOC text recovered");
        Ok(text)
    }
}
