use paralex::infrastructure::observability::sanitize_for_log;

#[test]
fn given_short_text_when_sanitizing_then_it_is_returned_trimmed() {
    assert_eq!(sanitize_for_log("  hello world  "), "hello world");
}

#[test]
fn given_empty_or_whitespace_text_when_sanitizing_then_placeholder_is_returned() {
    assert_eq!(sanitize_for_log(""), "[EMPTY]");
    assert_eq!(sanitize_for_log("   \n\t "), "[EMPTY]");
}

#[test]
fn given_long_text_when_sanitizing_then_a_prefix_and_total_length_remain() {
    let text = "a".repeat(500);
    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"a".repeat(120)));
    assert!(sanitized.ends_with("... (500 chars total)"));
}

#[test]
fn given_multibyte_text_when_sanitizing_then_truncation_respects_char_boundaries() {
    let text = "é".repeat(300);
    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.contains("(300 chars total)"));
    assert!(sanitized.starts_with(&"é".repeat(120)));
}
