//! Error type shared by the fallible parts of the crate.
//!
//! Position resolution over the tree never fails. Errors only come from the
//! edges: mapping a [`Pos`](crate::token::Pos) onto a concrete source file and
//! (de)serializing trees.

use std::fmt;

/// Additional information attached to an error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main error type for the crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A position that does not map onto the source file.
    InvalidPosition,
    /// A tree could not be converted to or from JSON.
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidPosition => "invalid position",
            ErrorKind::Serialization => "serialization error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for AstError {}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, AstError>;

impl From<serde_json::Error> for AstError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let error = AstError::new(ErrorKind::Serialization, err.to_string());
        if line > 0 {
            error.with_note(format!("JSON input line {}, column {}", line, column))
        } else {
            error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let error = AstError::new(ErrorKind::InvalidPosition, "offset 12 is out of range")
            .with_note("file 'main.river' is 10 bytes long")
            .with_help("positions must come from the same file");

        assert_eq!(
            error.to_string(),
            "invalid position: offset 12 is out of range\n\
             note: file 'main.river' is 10 bytes long\n\
             help: positions must come from the same file"
        );
    }

    #[test]
    fn test_display_without_context() {
        let error = AstError::new(ErrorKind::Serialization, "bad input");
        assert_eq!(error.to_string(), "serialization error: bad input");
    }
}
