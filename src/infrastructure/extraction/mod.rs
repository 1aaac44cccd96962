mod composite_extractor;
mod docx_adapter;
mod legacy_doc_adapter;
mod lossy_text;
mod pdf_adapter;
mod plain_text_adapter;
mod rtf_adapter;
mod spreadsheet_adapter;

pub use composite_extractor::CompositeExtractor;
pub use docx_adapter::DocxAdapter;
pub use legacy_doc_adapter::LegacyDocAdapter;
pub use lossy_text::{lossy_utf8_text, printable_ascii_text};
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use rtf_adapter::{strip_rtf_markup, RtfAdapter};
pub use spreadsheet_adapter::SpreadsheetAdapter;
