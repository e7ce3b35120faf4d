//! Source positions and token kinds shared with the scanner and parser.
//!
//! The AST never interprets these values beyond ordering, equality, and
//! advancing a position by a byte count.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A byte offset into a source file.
///
/// The raw value is the offset plus one so that the default value can act as
/// [`Pos::NONE`], which orders before every valid position. Serialized forms
/// carry the offset itself, with `NONE` written as `null`.
///
/// Offsets saturate at `usize::MAX - 1`; arithmetic never wraps around to
/// `NONE`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(usize);

impl Pos {
    /// The "no position" sentinel.
    pub const NONE: Pos = Pos(0);

    /// Position of the byte at `offset` (0-based).
    pub const fn new(offset: usize) -> Self {
        Pos(offset.saturating_add(1))
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// The 0-based byte offset, or `None` for [`Pos::NONE`].
    pub const fn offset(self) -> Option<usize> {
        match self.0 {
            0 => None,
            raw => Some(raw - 1),
        }
    }

    /// Advances the position by `n` bytes. `NONE` stays `NONE`.
    #[must_use]
    pub const fn add(self, n: usize) -> Self {
        if self.is_valid() {
            Pos(self.0.saturating_add(n))
        } else {
            self
        }
    }
}

impl Serialize for Pos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.offset().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let offset = Option::<usize>::deserialize(deserializer)?;
        Ok(offset.map_or(Pos::NONE, Pos::new))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset() {
            Some(offset) => write!(f, "{}", offset),
            None => f.write_str("-"),
        }
    }
}

/// Kinds of lexical tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    // Special
    Illegal,
    Eof,
    Comment,

    // Identifiers and literals
    Ident,
    Number,
    Float,
    String,
    Bool,
    Null,

    // Operators
    Or,
    And,
    Not,
    Assign,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Delimiters
    LCurly,
    RCurly,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Comma,
    Dot,

    Terminator,
}

/// Precedence of tokens that are not binary operators.
pub const LOWEST_PRECEDENCE: u8 = 0;

impl Token {
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Comment => "COMMENT",
            Token::Ident => "IDENT",
            Token::Number => "NUMBER",
            Token::Float => "FLOAT",
            Token::String => "STRING",
            Token::Bool => "BOOL",
            Token::Null => "NULL",
            Token::Or => "||",
            Token::And => "&&",
            Token::Not => "!",
            Token::Assign => "=",
            Token::Eq => "==",
            Token::Neq => "!=",
            Token::Lt => "<",
            Token::Lte => "<=",
            Token::Gt => ">",
            Token::Gte => ">=",
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Div => "/",
            Token::Mod => "%",
            Token::Pow => "^",
            Token::LCurly => "{",
            Token::RCurly => "}",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrack => "[",
            Token::RBrack => "]",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::Terminator => "TERMINATOR",
        }
    }

    /// Whether the token kind can tag a [`LiteralExpr`](crate::ast::LiteralExpr).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Number | Token::Float | Token::String | Token::Bool | Token::Null
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Or
                | Token::And
                | Token::Not
                | Token::Assign
                | Token::Eq
                | Token::Neq
                | Token::Lt
                | Token::Lte
                | Token::Gt
                | Token::Gte
                | Token::Add
                | Token::Sub
                | Token::Mul
                | Token::Div
                | Token::Mod
                | Token::Pow
        )
    }

    /// Binding strength of a binary operator; higher binds tighter.
    pub fn binary_precedence(&self) -> u8 {
        match self {
            Token::Or => 1,
            Token::And => 2,
            Token::Eq | Token::Neq | Token::Lt | Token::Lte | Token::Gt | Token::Gte => 3,
            Token::Add | Token::Sub => 4,
            Token::Mul | Token::Div | Token::Mod => 5,
            Token::Pow => 6,
            _ => LOWEST_PRECEDENCE,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
