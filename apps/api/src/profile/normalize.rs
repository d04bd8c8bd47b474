/// Line separators recognised when splitting extracted document text.
/// PDF text commonly carries form feeds between pages and bare `\r` endings.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits raw document text into trimmed, non-empty lines, in document order.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
