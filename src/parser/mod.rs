use crate::lexer::{LineCursor, SourceLine};
use crate::table::SymbolTable;
use crate::VarsError;

mod document;
mod object;
mod value;

pub use value::{parse_bool, parse_number};

/// Definition-file parser.
///
/// Owns the line cursor; the document loop and the recursive object parser
/// both pull lines through it.
pub struct Parser<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(input),
        }
    }

    pub(crate) fn next_data_line(&mut self) -> Option<SourceLine<'a>> {
        self.cursor.next_data_line()
    }

    pub(crate) fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Parse the whole input into a symbol table.
    ///
    /// Fails on the first malformed construct; no partial table is returned.
    pub fn parse_table(&mut self) -> Result<SymbolTable, VarsError> {
        document::parse_document(self)
    }
}

pub(crate) fn malformed_line(content: &str, line: usize) -> VarsError {
    VarsError::MalformedLine {
        content: content.to_string(),
        line,
        hint: Some("Expected `key = value`".into()),
        code: Some(101),
    }
}
