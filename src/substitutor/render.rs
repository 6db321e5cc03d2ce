use crate::ast::Value;
use crate::parser::parse_number;

/// Literal token for `value` in the template grammar.
///
/// - `Bool`: `true` / `false`
/// - `Number`: shortest text that round-trips, never an exponent
/// - `String`: bare if the content reads as a bool or a number, quoted otherwise
/// - `List`, `Object`: display form, quoted
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if reads_as_bool(s) || parse_number(s).is_some() {
                s.clone()
            } else {
                quote(s)
            }
        }
        Value::List(_) | Value::Object(_) => quote(&value.to_string()),
    }
}

/// Boolean spellings accepted when deciding whether a string renders bare.
///
/// Wider than the definition grammar, which only knows `true` and `false`.
fn reads_as_bool(text: &str) -> bool {
    matches!(
        text,
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false" | "False"
    )
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text)
}
