use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::Document;

/// Structured extraction for OOXML Word documents: unzip the package and
/// pull paragraph text out of `word/document.xml`.
pub struct DocxAdapter;

impl DocxAdapter {
    fn parse_document_xml(xml: &str) -> Result<String, ExtractionError> {
        let mut reader = Reader::from_str(xml);
        let mut out = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = true,
                    b"w:tab" => out.push('\t'),
                    b"w:br" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" => out.push('\t'),
                    b"w:br" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text_run => {
                    let text = t.unescape().map_err(|e| {
                        ExtractionError::ExtractionFailed(format!("invalid XML text: {e}"))
                    })?;
                    out.push_str(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractionError::ExtractionFailed(format!(
                        "malformed document XML: {e}"
                    )));
                }
                _ => {}
            }
        }

        Ok(out)
    }
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("not a valid OOXML package: {e}"))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ExtractionError::ExtractionFailed(format!("missing word/document.xml: {e}"))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                ExtractionError::ExtractionFailed(format!("failed to read document XML: {e}"))
            })?;

        let text = Self::parse_document_xml(&xml)?;
        tracing::info!(chars = text.len(), "DOCX text extraction complete");
        Ok(text)
    }
}
