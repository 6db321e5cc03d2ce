use indexmap::IndexMap;

use super::*;
use crate::ast::Value;
use crate::lexer::{is_skippable, split_assignment, strip_quotes};

/// Parse an object literal whose opening line is `raw` (starting with `{`).
///
/// A body closed on the same line is a single `key = "value"` pair. Otherwise
/// lines are pulled from the parser until one starts with `}`.
pub(super) fn parse_object(
    parser: &mut Parser,
    key: &str,
    raw: &str,
    line: usize,
) -> Result<IndexMap<String, Value>, VarsError> {
    let mut items = IndexMap::new();
    let rest = raw[1..].trim();

    if !is_skippable(rest) {
        if let Some(body) = rest.strip_suffix('}') {
            parse_inline_body(body.trim(), rest, line, &mut items)?;
            return Ok(items);
        }

        // first member shares the line with the opening brace
        let (member, value) = split_assignment(rest)
            .ok_or_else(|| malformed_line(rest, line))?;
        let value = parse_member_value(parser, member, value, line)?;
        items.insert(member.to_string(), value);
    }

    loop {
        let Some(next) = parser.next_data_line() else {
            return Err(VarsError::UnterminatedObject {
                key: key.to_string(),
                line,
                hint: Some(format!(
                    "Reached end of input at line {} before a closing '}}'",
                    parser.line()
                )),
                code: Some(103),
            });
        };

        if next.text.starts_with('}') {
            return Ok(items);
        }

        let (member, value) = split_assignment(next.text)
            .ok_or_else(|| malformed_line(next.text, next.number))?;
        let value = parse_member_value(parser, member, value, next.number)?;
        items.insert(member.to_string(), value);
    }
}

fn parse_inline_body(
    body: &str,
    content: &str,
    line: usize,
    items: &mut IndexMap<String, Value>,
) -> Result<(), VarsError> {
    if body.is_empty() {
        return Ok(());
    }

    let text = split_assignment(body)
        .and_then(|(member, value)| strip_quotes(value).map(|text| (member, text)));

    match text {
        Some((member, text)) => {
            items.insert(member.to_string(), Value::String(text.to_string()));
            Ok(())
        }
        None => Err(VarsError::InvalidObjectValue {
            content: content.to_string(),
            line,
            hint: Some("Single-line objects take one quoted value, e.g. {key = \"value\"}".into()),
            code: Some(102),
        }),
    }
}

/// Member values: nested objects recurse, quoted strings are unquoted,
/// anything else is kept verbatim.
fn parse_member_value(
    parser: &mut Parser,
    member: &str,
    raw: &str,
    line: usize,
) -> Result<Value, VarsError> {
    if raw.starts_with('{') {
        return parse_object(parser, member, raw, line).map(Value::Object);
    }

    Ok(Value::String(strip_quotes(raw).unwrap_or(raw).to_string()))
}
