use paralex::application::ports::TextExtractor;
use paralex::domain::Document;
use paralex::infrastructure::extraction::{strip_rtf_markup, RtfAdapter};

const SAMPLE_RTF: &str = r"{\rtf1\ansi\deff0 {\fonttbl {\f0 Times New Roman;}}{\colortbl;\red0\green0\blue0;}\f0\fs24 This Agreement is made\par between the parties.\par}";

#[test]
fn given_rtf_markup_when_stripping_then_no_control_sequences_remain() {
    let text = strip_rtf_markup(SAMPLE_RTF);

    assert!(!text.contains('\\'));
    assert!(!text.contains('{'));
    assert!(!text.contains('}'));
    assert!(text.contains("This Agreement is made"));
    assert!(text.contains("between the parties."));
}

#[test]
fn given_font_table_when_stripping_then_its_content_is_dropped() {
    let text = strip_rtf_markup(SAMPLE_RTF);
    assert!(!text.contains("Times New Roman"));
}

#[test]
fn given_par_control_when_stripping_then_it_becomes_a_line_break() {
    let text = strip_rtf_markup(r"{\rtf1 first\par second}");
    assert_eq!(text, "first\nsecond");
}

#[test]
fn given_hex_escapes_when_stripping_then_they_do_not_leak() {
    let text = strip_rtf_markup(r"{\rtf1 caf\'e9 terms}");
    assert!(!text.contains("'e9"));
    assert!(text.contains("terms"));
}

#[tokio::test]
async fn given_rtf_bytes_when_extracting_then_plain_text_is_returned() {
    let adapter = RtfAdapter;
    let data = SAMPLE_RTF.as_bytes();
    let document = Document::new(
        "memo.rtf".to_string(),
        "application/rtf".to_string(),
        data.len() as u64,
    );

    let text = adapter.extract_text(data, &document).await.unwrap();

    assert!(text.contains("This Agreement is made"));
    assert!(!text.contains('\\'));
}
