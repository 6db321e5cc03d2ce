use super::*;
use crate::ast::Value;
use crate::lexer::split_assignment;

pub(super) fn parse_document(parser: &mut Parser) -> Result<SymbolTable, VarsError> {
    let mut table = SymbolTable::new();

    while let Some(line) = parser.next_data_line() {
        let (key, value) = parse_assignment(parser, line)?;
        table.insert(key, value);
    }

    Ok(table)
}

fn parse_assignment(parser: &mut Parser, line: SourceLine) -> Result<(String, Value), VarsError> {
    let (key, raw) = split_assignment(line.text)
        .ok_or_else(|| malformed_line(line.text, line.number))?;

    let value = value::parse_value(parser, key, raw, line.number)?;
    Ok((key.to_string(), value))
}
