const MAX_VISIBLE_CHARS: usize = 120;

/// Truncate user-supplied text for logging. Uploaded documents are client
/// material; log lines carry only a short prefix and the total size.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let boundary = trimmed
        .char_indices()
        .take(MAX_VISIBLE_CHARS)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(trimmed.len());

    if boundary < trimmed.len() {
        format!("{}... ({} chars total)", &trimmed[..boundary], trimmed.len())
    } else {
        trimmed.to_string()
    }
}
