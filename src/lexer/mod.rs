// Author: Dustin Pilgrim
// License: MIT

use std::str::Lines;

mod scanner;

pub use scanner::{is_skippable, split_assignment, strip_quotes};

/// One physical line of definition text, already trimmed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Pull-based cursor over the lines of a definition file.
///
/// The top-level loop and the nested object parser share one cursor by
/// `&mut` and advance it explicitly, so a nested object consumes exactly the
/// lines up to its closing brace and the caller resumes right after it.
pub struct LineCursor<'a> {
    input: Lines<'a>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        LineCursor {
            input: input.lines(),
            line: 0,
        }
    }

    /// Number of the last line handed out (0 before the first one).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next physical line, trimmed
    pub fn next_line(&mut self) -> Option<SourceLine<'a>> {
        let raw = self.input.next()?;
        self.line += 1;
        Some(SourceLine {
            number: self.line,
            text: raw.trim(),
        })
    }

    /// Next line that carries data (blank and comment lines are skipped)
    pub fn next_data_line(&mut self) -> Option<SourceLine<'a>> {
        while let Some(line) = self.next_line() {
            if !is_skippable(line.text) {
                return Some(line);
            }
        }
        None
    }
}
