use std::io::Cursor;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::Document;

/// Renders each worksheet to CSV text, one `--- Sheet: <name> ---` header
/// per sheet, in the workbook's declared sheet order.
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    fn render_workbook(data: &[u8]) -> Result<String, ExtractionError> {
        let cursor = Cursor::new(data.to_vec());
        let mut workbook = open_workbook_auto_from_rs(cursor).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to open workbook: {e}"))
        })?;

        let sheet_names = workbook.sheet_names().to_owned();
        let mut sections = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                ExtractionError::ExtractionFailed(format!("failed to read sheet '{name}': {e}"))
            })?;

            let mut csv = String::new();
            for row in range.rows() {
                let line = row.iter().map(render_cell).collect::<Vec<_>>().join(",");
                csv.push_str(&line);
                csv.push('\n');
            }

            sections.push(format!("--- Sheet: {name} ---\n\n{csv}"));
        }

        Ok(sections.join("\n"))
    }
}

fn render_cell(cell: &Data) -> String {
    let value = match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    };

    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value
    }
}

#[async_trait]
impl TextExtractor for SpreadsheetAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        let text = Self::render_workbook(data)?;
        tracing::info!(chars = text.len(), "Spreadsheet rendered to CSV text");
        Ok(text)
    }
}
