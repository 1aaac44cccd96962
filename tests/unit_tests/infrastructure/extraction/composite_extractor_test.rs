use paralex::application::ports::{ExtractionError, TextExtractor};
use paralex::domain::Document;
use paralex::infrastructure::extraction::CompositeExtractor;

fn doc(filename: &str, media_type: &str, size: usize) -> Document {
    Document::new(filename.to_string(), media_type.to_string(), size as u64)
}

#[tokio::test]
async fn given_empty_buffer_when_extracting_then_empty_file_error_is_returned() {
    let extractor = CompositeExtractor::with_default_adapters();
    let document = doc("empty.pdf", "application/pdf", 0);

    let result = extractor.extract_text(&[], &document).await;

    match result {
        Err(ExtractionError::EmptyFile(name)) => assert_eq!(name, "empty.pdf"),
        other => panic!("expected EmptyFile, got {other:?}"),
    }
}

#[tokio::test]
async fn given_csv_upload_when_extracting_then_content_passes_through_verbatim() {
    let extractor = CompositeExtractor::with_default_adapters();
    let data = b"clause,status\ntermination,flagged\n";
    let document = doc("clauses.csv", "text/csv", data.len());

    let text = extractor.extract_text(data, &document).await.unwrap();

    assert_eq!(text, "clause,status\ntermination,flagged\n");
}

#[tokio::test]
async fn given_unknown_format_with_invalid_utf8_when_extracting_then_decoding_is_lossy() {
    let extractor = CompositeExtractor::with_default_adapters();
    let data = b"agreement \xff\xfe text";
    let document = doc("blob.bin", "application/octet-stream", data.len());

    let text = extractor.extract_text(data, &document).await.unwrap();

    assert!(text.contains("agreement"));
    assert!(text.contains("text"));
    assert!(text.contains('\u{fffd}'));
}

#[tokio::test]
async fn given_corrupt_docx_when_extracting_then_raw_text_recovery_kicks_in() {
    let extractor = CompositeExtractor::with_default_adapters();
    let data = b"\x00\x01 readable fragment \x02\x03";
    let document = doc(
        "broken.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        data.len(),
    );

    let text = extractor.extract_text(data, &document).await.unwrap();

    assert!(text.contains("readable fragment"));
}

#[tokio::test]
async fn given_corrupt_spreadsheet_when_extracting_then_raw_text_recovery_kicks_in() {
    let extractor = CompositeExtractor::with_default_adapters();
    let data = b"\xd0\xcf payment schedule \x11\xe0";
    let document = doc(
        "sched.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        data.len(),
    );

    let text = extractor.extract_text(data, &document).await.unwrap();

    assert!(text.contains("payment schedule"));
}

#[tokio::test]
async fn given_markdown_upload_when_extracting_then_text_adapter_handles_it() {
    let extractor = CompositeExtractor::with_default_adapters();
    let data = b"# Heading\n\nBody paragraph.";
    let document = doc("notes.md", "text/markdown", data.len());

    let text = extractor.extract_text(data, &document).await.unwrap();

    assert_eq!(text, "# Heading\n\nBody paragraph.");
}
