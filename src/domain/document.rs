use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub media_type: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, media_type: String, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            media_type,
            size_bytes,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::detect(&self.media_type, &self.filename)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Format class an uploaded document is routed to for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    LegacyDoc,
    Csv,
    Spreadsheet,
    Rtf,
    Text,
    Unknown,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

impl DocumentKind {
    /// Classify by declared media type and filename extension, case-insensitive.
    /// First matching rule wins, so CSV and RTF are checked before the
    /// generic `text/` prefix.
    pub fn detect(media_type: &str, filename: &str) -> Self {
        let mime = media_type.to_lowercase();
        let name = filename.to_lowercase();

        if mime == "application/pdf" || name.ends_with(".pdf") {
            return Self::Pdf;
        }
        if mime == DOCX_MIME || name.ends_with(".docx") {
            return Self::Docx;
        }
        if mime == "application/msword" || name.ends_with(".doc") {
            return Self::LegacyDoc;
        }
        if mime == "text/csv" || mime == "application/csv" || name.ends_with(".csv") {
            return Self::Csv;
        }
        if mime == "application/vnd.ms-excel"
            || mime == XLSX_MIME
            || name.ends_with(".xls")
            || name.ends_with(".xlsx")
        {
            return Self::Spreadsheet;
        }
        if mime == "text/rtf" || mime == "application/rtf" || name.ends_with(".rtf") {
            return Self::Rtf;
        }
        if mime.starts_with("text/") || name.ends_with(".txt") || name.ends_with(".md") {
            return Self::Text;
        }

        Self::Unknown
    }
}
