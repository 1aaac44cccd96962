use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentKind};

use super::{
    printable_ascii_text, DocxAdapter, LegacyDocAdapter, PdfAdapter, PlainTextAdapter,
    RtfAdapter, SpreadsheetAdapter,
};

/// Routes an upload to the adapter for its format class. The only hard
/// failure is an empty byte buffer; a structured parser choking on
/// malformed input degrades to the printable-text fallback instead, so a
/// non-empty upload always yields some text.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentKind, Arc<dyn TextExtractor>>,
    fallback: Arc<dyn TextExtractor>,
}

impl CompositeExtractor {
    pub fn new(
        adapters: Vec<(DocumentKind, Arc<dyn TextExtractor>)>,
        fallback: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
            fallback,
        }
    }

    pub fn with_default_adapters() -> Self {
        let plain: Arc<dyn TextExtractor> = Arc::new(PlainTextAdapter);
        Self::new(
            vec![
                (DocumentKind::Pdf, Arc::new(PdfAdapter::new())),
                (DocumentKind::Docx, Arc::new(DocxAdapter)),
                (DocumentKind::LegacyDoc, Arc::new(LegacyDocAdapter)),
                (DocumentKind::Csv, Arc::clone(&plain)),
                (DocumentKind::Spreadsheet, Arc::new(SpreadsheetAdapter)),
                (DocumentKind::Rtf, Arc::new(RtfAdapter)),
                (DocumentKind::Text, Arc::clone(&plain)),
            ],
            plain,
        )
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, media_type = %document.media_type)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if data.is_empty() {
            return Err(ExtractionError::EmptyFile(document.filename.clone()));
        }

        let kind = document.kind();
        let adapter = self.adapters.get(&kind).unwrap_or(&self.fallback);

        match adapter.extract_text(data, document).await {
            Ok(text) => Ok(text),
            Err(ExtractionError::EmptyFile(name)) => Err(ExtractionError::EmptyFile(name)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = ?kind,
                    "Structured extraction failed, falling back to raw text recovery"
                );
                Ok(printable_ascii_text(data))
            }
        }
    }
}
