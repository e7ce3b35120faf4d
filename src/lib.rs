//! Syntax tree for the River configuration language.
//!
//! [`ast`] holds the closed set of node types together with the position
//! resolver. The tree is produced by a parser, then only read by evaluators,
//! formatters and diagnostics.

pub mod ast;
pub mod config;
pub mod debug;
pub mod dump;
pub mod error;
pub mod source;
pub mod token;

pub use ast::*;
pub use config::*;
pub use error::{AstError, ErrorKind};
pub use source::{Position, SourceFile, SourceSpan};
pub use token::{Pos, Token};
