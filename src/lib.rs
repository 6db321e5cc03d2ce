pub mod ast;
pub mod discovery;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod run;
pub mod substitutor;
pub mod table;

pub use ast::Value;
pub use error::VarsError;
pub use export::ExportFormat;
pub use run::{run, RunOptions, RunSummary};
pub use substitutor::{substitute, substitute_with_report, SubstitutionReport};
pub use table::SymbolTable;

/// Parse one definition text into a symbol table.
pub fn parse(input: &str) -> Result<SymbolTable, VarsError> {
    parser::Parser::new(input).parse_table()
}
