//! Mapping from byte positions to human-readable line and column numbers.

use std::fmt;

use crate::ast::Spanned;
use crate::debug_println;
use crate::error::{AstError, ErrorKind, Result};
use crate::token::Pos;

/// A resolved source location. `line` and `column` are 1-based, and `column`
/// counts bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filename.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.filename, self.line, self.column)
        }
    }
}

/// The resolved start and end of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: Position,
    pub end: Position,
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}:{}", self.start, self.end.line, self.end.column)
        }
    }
}

/// Line table for a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
    len: usize,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        let name = name.into();
        let line_starts: Vec<usize> = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();

        debug_println!(
            "source: indexed {} line(s) in '{}' ({} bytes)",
            line_starts.len(),
            name,
            source.len()
        );

        Self {
            name,
            line_starts,
            len: source.len(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolves `pos` to a line and column.
    ///
    /// The offset one past the last byte is accepted so that end-of-file
    /// positions resolve.
    pub fn position(&self, pos: Pos) -> Result<Position> {
        let offset = pos.offset().ok_or_else(|| {
            AstError::new(ErrorKind::InvalidPosition, "node has no position")
                .with_help("synthesized nodes and empty containers carry no source location")
        })?;

        if offset > self.len {
            return Err(AstError::new(
                ErrorKind::InvalidPosition,
                format!("offset {} is out of range", offset),
            )
            .with_note(format!("'{}' is {} bytes long", self.name, self.len)));
        }

        let line = self.line_starts.partition_point(|&start| start <= offset);
        let column = offset - self.line_starts[line - 1] + 1;

        Ok(Position {
            filename: self.name.clone(),
            line,
            column,
        })
    }

    /// Resolves both ends of `node`.
    pub fn span<N: Spanned + ?Sized>(&self, node: &N) -> Result<SourceSpan> {
        Ok(SourceSpan {
            start: self.position(node.start_pos())?,
            end: self.position(node.end_pos())?,
        })
    }
}
