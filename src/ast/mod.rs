//! Abstract Syntax Tree (AST) type definitions for River
//!
//! The node set is closed. [`Stmt`] and [`Expr`] enumerate every statement and
//! expression shape, and [`Node`] is a borrowed view over every node type, so
//! a `match` on any of them is checked for exhaustiveness by the compiler.
//!
//! Trees are built once by the parser and only read afterwards. Every node is
//! owned by exactly one parent; [`File`] is the root.

use std::ops::Deref;

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use crate::token::{Pos, Token};

pub mod pos;
pub mod walk;

pub use pos::{end_pos, start_pos, Span, Spanned};
pub use walk::NodeExt;

/// A parsed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// File name provided to the parser
    pub name: String,
    pub body: Body,
    /// Every comment in the file, in source order
    pub comments: Vec<CommentGroup>,
}

impl File {
    pub fn new(name: impl Into<String>, body: Body, comments: Vec<CommentGroup>) -> Self {
        Self {
            name: name.into(),
            body,
            comments,
        }
    }
}

/// An ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(Vec<Stmt>);

impl Body {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self(statements)
    }
}

impl Deref for Body {
    type Target = [Stmt];

    fn deref(&self) -> &[Stmt] {
        &self.0
    }
}

impl From<Vec<Stmt>> for Body {
    fn from(statements: Vec<Stmt>) -> Self {
        Self(statements)
    }
}

impl FromIterator<Stmt> for Body {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A run of comments not separated by an empty line or any other token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentGroup(Vec<Comment>);

impl CommentGroup {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self(comments)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.0
    }

    /// The text of every comment in the group, one per line.
    pub fn text(&self) -> String {
        self.0
            .iter()
            .map(|comment| comment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Deref for CommentGroup {
    type Target = [Comment];

    fn deref(&self) -> &[Comment] {
        &self.0
    }
}

impl From<Vec<Comment>> for CommentGroup {
    fn from(comments: Vec<Comment>) -> Self {
        Self(comments)
    }
}

impl FromIterator<Comment> for CommentGroup {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CommentGroup {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single line or block comment.
///
/// `text` has any carriage returns from the source removed, so the end
/// position of a comment that contained them is not accurate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub start: Pos,
    /// Comment text including its delimiters. Never contains `\n` for line comments.
    pub text: String,
}

impl Comment {
    pub fn new(start: Pos, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }
}

/// A statement within a [`Body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Attribute(AttributeStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn as_node(&self) -> Node<'_> {
        match self {
            Stmt::Attribute(stmt) => Node::Attribute(stmt),
            Stmt::Block(stmt) => Node::Block(stmt),
        }
    }
}

/// An expression producing a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Literal(LiteralExpr),
    Array(ArrayExpr),
    Object(ObjectExpr),
    Access(AccessExpr),
    Index(IndexExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Paren(ParenExpr),
}

impl Expr {
    pub fn as_node(&self) -> Node<'_> {
        match self {
            Expr::Identifier(expr) => Node::Identifier(expr),
            Expr::Literal(expr) => Node::Literal(expr),
            Expr::Array(expr) => Node::Array(expr),
            Expr::Object(expr) => Node::Object(expr),
            Expr::Access(expr) => Node::Access(expr),
            Expr::Index(expr) => Node::Index(expr),
            Expr::Call(expr) => Node::Call(expr),
            Expr::Unary(expr) => Node::Unary(expr),
            Expr::Binary(expr) => Node::Binary(expr),
            Expr::Paren(expr) => Node::Paren(expr),
        }
    }
}

/// A key-value pair set in a [`Body`], e.g. `key = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeStmt {
    pub name: IdentifierExpr,
    pub value: Expr,
}

impl AttributeStmt {
    pub fn new(name: IdentifierExpr, value: impl Into<Expr>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A block declaration, e.g. `remote.http "default" { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    /// Name parts separated by `.` in the source
    pub name: NonEmpty<String>,
    pub name_pos: Pos,
    pub label: Option<String>,
    pub body: Body,
    pub lcurly: Pos,
    pub rcurly: Pos,
}

impl BlockStmt {
    pub fn new(
        name: NonEmpty<String>,
        name_pos: Pos,
        label: Option<String>,
        body: Body,
        lcurly: Pos,
        rcurly: Pos,
    ) -> Self {
        Self {
            name,
            name_pos,
            label,
            body,
            lcurly,
            rcurly,
        }
    }

    /// The qualified name with its parts joined by `.`.
    pub fn full_name(&self) -> String {
        self.name.iter().map(String::as_str).collect::<Vec<_>>().join(".")
    }
}

/// A reference to a named value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierExpr {
    pub name: String,
    pub name_pos: Pos,
}

impl IdentifierExpr {
    pub fn new(name: impl Into<String>, name_pos: Pos) -> Self {
        Self {
            name: name.into(),
            name_pos,
        }
    }
}

/// A constant value of a specific token kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpr {
    pub kind: Token,
    pub value_pos: Pos,
    /// The unparsed source text. A [`Token::String`] literal keeps its quotes.
    pub value: String,
}

impl LiteralExpr {
    pub fn new(kind: Token, value_pos: Pos, value: impl Into<String>) -> Self {
        Self {
            kind,
            value_pos,
            value: value.into(),
        }
    }
}

/// An array of values, e.g. `[1, 2, 3]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    pub lbrack: Pos,
    pub rbrack: Pos,
}

impl ArrayExpr {
    pub fn new(elements: Vec<Expr>, lbrack: Pos, rbrack: Pos) -> Self {
        Self {
            elements,
            lbrack,
            rbrack,
        }
    }
}

/// An object of key-value pairs, e.g. `{ a = 1 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpr {
    pub fields: Vec<ObjectField>,
    pub lcurly: Pos,
    pub rcurly: Pos,
}

impl ObjectExpr {
    pub fn new(fields: Vec<ObjectField>, lcurly: Pos, rcurly: Pos) -> Self {
        Self {
            fields,
            lcurly,
            rcurly,
        }
    }
}

/// A single key-value pair within an [`ObjectExpr`]. Not a node on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: IdentifierExpr,
    /// Whether the name was written as a quoted string
    pub quoted: bool,
    pub value: Expr,
}

impl ObjectField {
    pub fn new(name: IdentifierExpr, quoted: bool, value: impl Into<Expr>) -> Self {
        Self {
            name,
            quoted,
            value: value.into(),
        }
    }
}

/// Access of a named field, e.g. `value.name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessExpr {
    pub value: Box<Expr>,
    pub name: IdentifierExpr,
}

impl AccessExpr {
    pub fn new(value: impl Into<Expr>, name: IdentifierExpr) -> Self {
        Self {
            value: Box::new(value.into()),
            name,
        }
    }
}

/// Access of an array element, e.g. `value[index]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub value: Box<Expr>,
    pub index: Box<Expr>,
    pub lbrack: Pos,
    pub rbrack: Pos,
}

impl IndexExpr {
    pub fn new(value: impl Into<Expr>, index: impl Into<Expr>, lbrack: Pos, rbrack: Pos) -> Self {
        Self {
            value: Box::new(value.into()),
            index: Box::new(index.into()),
            lbrack,
            rbrack,
        }
    }
}

/// A function call, e.g. `value(args...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    /// The callee
    pub value: Box<Expr>,
    pub args: Vec<Expr>,
    pub lparen: Pos,
    pub rparen: Pos,
}

impl CallExpr {
    pub fn new(value: impl Into<Expr>, args: Vec<Expr>, lparen: Pos, rparen: Pos) -> Self {
        Self {
            value: Box::new(value.into()),
            args,
            lparen,
            rparen,
        }
    }
}

/// A unary operation, e.g. `!value` or `-value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub kind: Token,
    pub kind_pos: Pos,
    pub value: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(kind: Token, kind_pos: Pos, value: impl Into<Expr>) -> Self {
        Self {
            kind,
            kind_pos,
            value: Box::new(value.into()),
        }
    }
}

/// A binary operation, e.g. `left + right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub kind: Token,
    pub kind_pos: Pos,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(kind: Token, kind_pos: Pos, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            kind,
            kind_pos,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

/// An expression wrapped in parentheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
    pub lparen: Pos,
    pub rparen: Pos,
}

impl ParenExpr {
    pub fn new(inner: impl Into<Expr>, lparen: Pos, rparen: Pos) -> Self {
        Self {
            inner: Box::new(inner.into()),
            lparen,
            rparen,
        }
    }
}

/// A borrowed reference to any node in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    File(&'a File),
    Body(&'a Body),
    CommentGroup(&'a CommentGroup),
    Comment(&'a Comment),
    Attribute(&'a AttributeStmt),
    Block(&'a BlockStmt),
    Identifier(&'a IdentifierExpr),
    Literal(&'a LiteralExpr),
    Array(&'a ArrayExpr),
    Object(&'a ObjectExpr),
    Access(&'a AccessExpr),
    Index(&'a IndexExpr),
    Call(&'a CallExpr),
    Unary(&'a UnaryExpr),
    Binary(&'a BinaryExpr),
    Paren(&'a ParenExpr),
}

impl Node<'_> {
    /// Name of the node's type, stable across releases.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::File(_) => "File",
            Node::Body(_) => "Body",
            Node::CommentGroup(_) => "CommentGroup",
            Node::Comment(_) => "Comment",
            Node::Attribute(_) => "AttributeStmt",
            Node::Block(_) => "BlockStmt",
            Node::Identifier(_) => "IdentifierExpr",
            Node::Literal(_) => "LiteralExpr",
            Node::Array(_) => "ArrayExpr",
            Node::Object(_) => "ObjectExpr",
            Node::Access(_) => "AccessExpr",
            Node::Index(_) => "IndexExpr",
            Node::Call(_) => "CallExpr",
            Node::Unary(_) => "UnaryExpr",
            Node::Binary(_) => "BinaryExpr",
            Node::Paren(_) => "ParenExpr",
        }
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, Node::Attribute(_) | Node::Block(_))
    }

    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            Node::Identifier(_)
                | Node::Literal(_)
                | Node::Array(_)
                | Node::Object(_)
                | Node::Access(_)
                | Node::Index(_)
                | Node::Call(_)
                | Node::Unary(_)
                | Node::Binary(_)
                | Node::Paren(_)
        )
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        stmt.as_node()
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        expr.as_node()
    }
}

macro_rules! node_types {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

node_types! {
    File => File,
    Body => Body,
    CommentGroup => CommentGroup,
    Comment => Comment,
    AttributeStmt => Attribute,
    BlockStmt => Block,
    IdentifierExpr => Identifier,
    LiteralExpr => Literal,
    ArrayExpr => Array,
    ObjectExpr => Object,
    AccessExpr => Access,
    IndexExpr => Index,
    CallExpr => Call,
    UnaryExpr => Unary,
    BinaryExpr => Binary,
    ParenExpr => Paren,
}

macro_rules! member_of {
    ($category:ident: $($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for $category {
                fn from(node: $ty) -> Self {
                    $category::$variant(node)
                }
            }
        )*
    };
}

member_of! { Stmt:
    AttributeStmt => Attribute,
    BlockStmt => Block,
}

member_of! { Expr:
    IdentifierExpr => Identifier,
    LiteralExpr => Literal,
    ArrayExpr => Array,
    ObjectExpr => Object,
    AccessExpr => Access,
    IndexExpr => Index,
    CallExpr => Call,
    UnaryExpr => Unary,
    BinaryExpr => Binary,
    ParenExpr => Paren,
}
