use paralex::domain::DocumentKind;

#[test]
fn given_pdf_mime_or_extension_when_detecting_then_routes_to_pdf() {
    assert_eq!(
        DocumentKind::detect("application/pdf", "contract"),
        DocumentKind::Pdf
    );
    assert_eq!(
        DocumentKind::detect("application/octet-stream", "Contract.PDF"),
        DocumentKind::Pdf
    );
}

#[test]
fn given_word_mimes_when_detecting_then_distinguishes_docx_from_legacy_doc() {
    assert_eq!(
        DocumentKind::detect(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "nda"
        ),
        DocumentKind::Docx
    );
    assert_eq!(
        DocumentKind::detect("application/msword", "nda"),
        DocumentKind::LegacyDoc
    );
    assert_eq!(
        DocumentKind::detect("application/octet-stream", "nda.DOCX"),
        DocumentKind::Docx
    );
    assert_eq!(
        DocumentKind::detect("application/octet-stream", "nda.doc"),
        DocumentKind::LegacyDoc
    );
}

#[test]
fn given_csv_and_rtf_mimes_when_detecting_then_they_win_over_text_prefix() {
    assert_eq!(DocumentKind::detect("text/csv", "data"), DocumentKind::Csv);
    assert_eq!(
        DocumentKind::detect("application/csv", "data"),
        DocumentKind::Csv
    );
    assert_eq!(DocumentKind::detect("text/rtf", "memo"), DocumentKind::Rtf);
    assert_eq!(
        DocumentKind::detect("application/rtf", "memo"),
        DocumentKind::Rtf
    );
}

#[test]
fn given_spreadsheet_mimes_when_detecting_then_routes_to_spreadsheet() {
    assert_eq!(
        DocumentKind::detect("application/vnd.ms-excel", "book"),
        DocumentKind::Spreadsheet
    );
    assert_eq!(
        DocumentKind::detect(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "book"
        ),
        DocumentKind::Spreadsheet
    );
    assert_eq!(
        DocumentKind::detect("application/octet-stream", "Book.XLSX"),
        DocumentKind::Spreadsheet
    );
}

#[test]
fn given_generic_text_when_detecting_then_routes_to_text() {
    assert_eq!(
        DocumentKind::detect("text/plain", "notes"),
        DocumentKind::Text
    );
    assert_eq!(
        DocumentKind::detect("text/markdown", "notes"),
        DocumentKind::Text
    );
    assert_eq!(
        DocumentKind::detect("application/octet-stream", "README.md"),
        DocumentKind::Text
    );
}

#[test]
fn given_unrecognized_input_when_detecting_then_falls_through_to_unknown() {
    assert_eq!(
        DocumentKind::detect("application/octet-stream", "mystery.bin"),
        DocumentKind::Unknown
    );
}
