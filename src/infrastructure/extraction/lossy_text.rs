use regex::Regex;
use std::sync::LazyLock;

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Decode bytes as UTF-8, substituting replacement characters for malformed
/// sequences. Never fails.
pub fn lossy_utf8_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// Pull readable text out of a binary buffer: keep printable ASCII plus
/// newline, carriage return, and tab; everything else becomes a space, and
/// runs of 2+ spaces collapse to one.
pub fn printable_ascii_text(data: &[u8]) -> String {
    let raw = String::from_utf8_lossy(data);
    let replaced: String = raw
        .chars()
        .map(|c| match c {
            ' '..='~' | '\n' | '\r' | '\t' => c,
            _ => ' ',
        })
        .collect();
    SPACE_RUNS.replace_all(&replaced, " ").into_owned()
}
