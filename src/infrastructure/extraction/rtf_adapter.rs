use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::Document;

// Destination groups whose content is metadata, not document text.
const DESTINATION_GROUPS: [&str; 6] = [
    "\\fonttbl",
    "\\colortbl",
    "\\stylesheet",
    "\\info",
    "\\pict",
    "\\*",
];

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:par|line)\b ?").unwrap());
static HEX_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\'[0-9a-fA-F]{2}").unwrap());
static CONTROL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+-?\d* ?").unwrap());
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Drop brace groups that open with a destination control word, tracking
/// brace depth so nested groups (a font table's font entries, say) go with
/// their parent.
fn remove_destination_groups(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if bytes[i] == b'{' && DESTINATION_GROUPS.iter().any(|d| input[i + 1..].starts_with(d)) {
            let mut depth = 1;
            let mut j = i + 1;
            while j < input.len() && depth > 0 {
                match bytes[j] {
                    b'{' => depth += 1,
                    b'}' => depth -= 1,
                    _ => {}
                }
                j += 1;
            }
            i = j;
            continue;
        }

        let ch = input[i..].chars().next().unwrap_or('\u{fffd}');
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

/// Heuristic RTF markup stripper. Formatting is discarded and only the
/// running text survives.
pub fn strip_rtf_markup(raw: &str) -> String {
    let text = remove_destination_groups(raw);
    let text = PARAGRAPH_BREAK.replace_all(&text, "\n");
    let text = HEX_ESCAPE.replace_all(&text, " ");
    let text = CONTROL_WORD.replace_all(&text, "");
    let text = text.replace(['{', '}', '\\'], "");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");

    text.trim().to_string()
}

pub struct RtfAdapter;

#[async_trait]
impl TextExtractor for RtfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        let raw = String::from_utf8_lossy(data);
        let text = strip_rtf_markup(&raw);
        tracing::debug!(chars = text.len(), "RTF markup stripped");
        Ok(text)
    }
}
