/// Blank lines and `#` / `//` comments carry no data.
pub fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

/// Split on the first `=` only; both halves are trimmed.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Strip one pair of surrounding double quotes.
///
/// Returns `None` unless the text is at least two characters long and both
/// starts and ends with `"`. No escape processing happens here.
pub fn strip_quotes(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
