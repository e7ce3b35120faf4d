//! Source positions of nodes.
//!
//! Only a few anchor positions are stored in the tree: identifier and literal
//! starts, delimiters, operators and block names. Every other position is
//! derived from a child, so a node's span always agrees with its children.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::*;

/// The first and last byte of a node. Both ends are inclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const NONE: Span = Span {
        start: Pos::NONE,
        end: Pos::NONE,
    };

    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.is_valid() && pos.is_valid() && self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.start.is_valid() && !self.end.is_valid() {
            f.write_str("-")
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Anything that occupies a range of source text.
pub trait Spanned {
    /// Position of the first character belonging to the node.
    fn start_pos(&self) -> Pos;

    /// Position of the final character belonging to the node.
    fn end_pos(&self) -> Pos;

    fn span(&self) -> Span {
        Span::new(self.start_pos(), self.end_pos())
    }
}

/// Position of the first character belonging to `node`.
pub fn start_pos<'a>(node: impl Into<Node<'a>>) -> Pos {
    node.into().start_pos()
}

/// Position of the final character belonging to `node`.
pub fn end_pos<'a>(node: impl Into<Node<'a>>) -> Pos {
    node.into().end_pos()
}

/// End of a leaf whose text starts at `start`.
fn text_end(start: Pos, text: &str) -> Pos {
    start.add(text.len().saturating_sub(1))
}

impl Spanned for Node<'_> {
    fn start_pos(&self) -> Pos {
        match *self {
            Node::File(file) => file.body.start_pos(),
            Node::Body(body) => body.first().start_pos(),
            Node::CommentGroup(group) => group.first().start_pos(),
            Node::Comment(comment) => comment.start,
            Node::Attribute(stmt) => stmt.name.start_pos(),
            Node::Block(stmt) => stmt.name_pos,
            Node::Identifier(expr) => expr.name_pos,
            Node::Literal(expr) => expr.value_pos,
            Node::Array(expr) => expr.lbrack,
            Node::Object(expr) => expr.lcurly,
            Node::Access(expr) => expr.value.start_pos(),
            Node::Index(expr) => expr.value.start_pos(),
            Node::Call(expr) => expr.value.start_pos(),
            Node::Unary(expr) => expr.kind_pos,
            Node::Binary(expr) => expr.left.start_pos(),
            Node::Paren(expr) => expr.lparen,
        }
    }

    fn end_pos(&self) -> Pos {
        match *self {
            Node::File(file) => file.body.end_pos(),
            Node::Body(body) => body.last().end_pos(),
            Node::CommentGroup(group) => group.last().end_pos(),
            // Carriage returns were stripped from the text, so this undershoots
            // for comments that contained them.
            Node::Comment(comment) => text_end(comment.start, &comment.text),
            // The value is not part of the attribute's span.
            Node::Attribute(stmt) => stmt.name.end_pos(),
            Node::Block(stmt) => stmt.rcurly,
            Node::Identifier(expr) => text_end(expr.name_pos, &expr.name),
            Node::Literal(expr) => text_end(expr.value_pos, &expr.value),
            Node::Array(expr) => expr.rbrack,
            Node::Object(expr) => expr.rcurly,
            Node::Access(expr) => expr.name.end_pos(),
            Node::Index(expr) => expr.rbrack,
            Node::Call(expr) => expr.rparen,
            Node::Unary(expr) => expr.value.end_pos(),
            Node::Binary(expr) => expr.right.end_pos(),
            Node::Paren(expr) => expr.rparen,
        }
    }
}

impl Spanned for Stmt {
    fn start_pos(&self) -> Pos {
        self.as_node().start_pos()
    }

    fn end_pos(&self) -> Pos {
        self.as_node().end_pos()
    }
}

impl Spanned for Expr {
    fn start_pos(&self) -> Pos {
        self.as_node().start_pos()
    }

    fn end_pos(&self) -> Pos {
        self.as_node().end_pos()
    }
}

macro_rules! spanned_via_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                fn start_pos(&self) -> Pos {
                    Node::from(self).start_pos()
                }

                fn end_pos(&self) -> Pos {
                    Node::from(self).end_pos()
                }
            }
        )*
    };
}

spanned_via_node!(
    File,
    Body,
    CommentGroup,
    Comment,
    AttributeStmt,
    BlockStmt,
    IdentifierExpr,
    LiteralExpr,
    ArrayExpr,
    ObjectExpr,
    AccessExpr,
    IndexExpr,
    CallExpr,
    UnaryExpr,
    BinaryExpr,
    ParenExpr,
);

impl<T: Spanned + ?Sized> Spanned for &T {
    fn start_pos(&self) -> Pos {
        (**self).start_pos()
    }

    fn end_pos(&self) -> Pos {
        (**self).end_pos()
    }
}

impl<T: Spanned + ?Sized> Spanned for Box<T> {
    fn start_pos(&self) -> Pos {
        (**self).start_pos()
    }

    fn end_pos(&self) -> Pos {
        (**self).end_pos()
    }
}

/// An absent node has no position.
impl<T: Spanned> Spanned for Option<T> {
    fn start_pos(&self) -> Pos {
        self.as_ref().map_or(Pos::NONE, T::start_pos)
    }

    fn end_pos(&self) -> Pos {
        self.as_ref().map_or(Pos::NONE, T::end_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str, offset: usize) -> IdentifierExpr {
        IdentifierExpr::new(name, Pos::new(offset))
    }

    #[test]
    fn test_identifier_end() {
        let id = ident("foo", 10);
        assert_eq!(id.start_pos(), Pos::new(10));
        assert_eq!(id.end_pos(), Pos::new(10).add(2));
    }

    #[test]
    fn test_single_character_leaf() {
        let id = ident("a", 0);
        assert_eq!(id.start_pos(), id.end_pos());
    }

    #[test]
    fn test_absent_node() {
        let none: Option<&Expr> = None;
        assert_eq!(none.start_pos(), Pos::NONE);
        assert_eq!(none.end_pos(), Pos::NONE);
        assert_eq!(none.span(), Span::NONE);
    }

    #[test]
    fn test_empty_containers() {
        let body = Body::default();
        let group = CommentGroup::default();
        assert_eq!(body.span(), Span::NONE);
        assert_eq!(group.span(), Span::NONE);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(Pos::new(2), Pos::new(5));
        assert!(span.contains(Pos::new(2)));
        assert!(span.contains(Pos::new(5)));
        assert!(!span.contains(Pos::new(6)));
        assert!(!span.contains(Pos::NONE));
        assert!(!Span::NONE.contains(Pos::new(0)));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(Pos::new(0), Pos::new(4)).to_string(), "0-4");
        assert_eq!(Span::NONE.to_string(), "-");
    }
}
