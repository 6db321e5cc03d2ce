// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for definition parsing, loading and export.
#[derive(Debug, Clone, PartialEq)]
pub enum VarsError {
    /// A definition line has no `=`.
    MalformedLine {
        content: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A single-line object body whose value is not a quoted string.
    InvalidObjectValue {
        content: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Input ended while an object was still open.
    UnterminatedObject {
        key: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A parse error raised while reading a specific definition file.
    InFile {
        path: String,
        source: Box<VarsError>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    KeyNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl VarsError {
    /// Attach the file a parse error came from.
    pub fn in_file(self, path: impl Into<String>) -> Self {
        VarsError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The error code, looking through `InFile` wrappers.
    pub fn code(&self) -> Option<u32> {
        match self {
            VarsError::MalformedLine { code, .. }
            | VarsError::InvalidObjectValue { code, .. }
            | VarsError::UnterminatedObject { code, .. }
            | VarsError::FileError { code, .. }
            | VarsError::TypeError { code, .. }
            | VarsError::KeyNotFound { code, .. }
            | VarsError::ExportError { code, .. } => *code,
            VarsError::InFile { source, .. } => source.code(),
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for VarsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarsError::MalformedLine { content, line, hint, code } =>
                write!(f, "[VARS] Malformed line {}: '{}'{}",
                    line, content, suffix(hint, code)
                ),
            VarsError::InvalidObjectValue { content, line, hint, code } =>
                write!(f, "[VARS] Invalid object value format at line {}: '{}'{}",
                    line, content, suffix(hint, code)
                ),
            VarsError::UnterminatedObject { key, line, hint, code } =>
                write!(f, "[VARS] Unterminated object '{}' opened at line {}{}",
                    key, line, suffix(hint, code)
                ),
            VarsError::FileError { message, path, hint, code } =>
                write!(f, "[VARS] File Error '{}': {}{}",
                    path, message, suffix(hint, code)
                ),
            VarsError::InFile { path, source } =>
                write!(f, "{} (in '{}')", source, path),
            VarsError::TypeError { message, hint, code } =>
                write!(f, "[VARS] Type Error: {}{}",
                    message, suffix(hint, code)
                ),
            VarsError::KeyNotFound { path, hint, code } =>
                write!(f, "[VARS] Key not found: '{}'{}",
                    path, suffix(hint, code)
                ),
            VarsError::ExportError { message, hint, code } =>
                write!(f, "[VARS] Export Error: {}{}",
                    message, suffix(hint, code)
                ),
        }
    }
}

impl std::error::Error for VarsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VarsError::InFile { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
