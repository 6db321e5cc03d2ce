use super::*;
use crate::ast::Value;
use crate::lexer::strip_quotes;

/// Classify the right-hand side of a top-level assignment.
///
/// Precedence: object, quoted string, list, number, bool, bare text.
pub(super) fn parse_value(
    parser: &mut Parser,
    key: &str,
    raw: &str,
    line: usize,
) -> Result<Value, VarsError> {
    if raw.starts_with('{') {
        return object::parse_object(parser, key, raw, line).map(Value::Object);
    }

    if let Some(text) = strip_quotes(raw) {
        return Ok(Value::String(text.to_string()));
    }

    if let Some(items) = parse_list(raw) {
        return Ok(Value::List(items));
    }

    if let Some(n) = parse_number(raw) {
        return Ok(Value::Number(n));
    }

    if let Some(b) = parse_bool(raw) {
        return Ok(Value::Bool(b));
    }

    Ok(Value::String(raw.to_string()))
}

/// Finite decimal numbers only; `inf`, `NaN` and overflowing literals are not numbers.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// `[a, "b", 1]` -> `["a", "b", "1"]`. Members stay strings.
///
/// A blank body is an empty list; blank members elsewhere are kept as `""`.
fn parse_list(text: &str) -> Option<Vec<String>> {
    let body = text.strip_prefix('[')?.strip_suffix(']')?;

    if body.trim().is_empty() {
        return Some(Vec::new());
    }

    let items = body
        .split(',')
        .map(str::trim)
        .map(|item| strip_quotes(item).unwrap_or(item).to_string())
        .collect();

    Some(items)
}
