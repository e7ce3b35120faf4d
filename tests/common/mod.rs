#![allow(dead_code)]

use nonempty::NonEmpty;
use river_ast::{
    AccessExpr, ArrayExpr, AttributeStmt, BlockStmt, Body, Comment, CommentGroup, Expr, File,
    IdentifierExpr, LiteralExpr, Pos, Stmt, Token,
};

pub const MAIN_SOURCE: &str = "// Scrape config\na = 1\nfoo \"bar\" {\n  b = [x, y.z]\n}\n";

pub fn ident(name: &str, offset: usize) -> IdentifierExpr {
    IdentifierExpr::new(name, Pos::new(offset))
}

pub fn number(value: &str, offset: usize) -> LiteralExpr {
    LiteralExpr::new(Token::Number, Pos::new(offset), value)
}

pub fn string(value: &str, offset: usize) -> LiteralExpr {
    LiteralExpr::new(Token::String, Pos::new(offset), format!("{:?}", value))
}

pub fn attr(name: IdentifierExpr, value: impl Into<Expr>) -> Stmt {
    AttributeStmt::new(name, value).into()
}

pub fn block(
    name: &[&str],
    name_pos: usize,
    label: Option<&str>,
    body: Vec<Stmt>,
    lcurly: usize,
    rcurly: usize,
) -> BlockStmt {
    let name = NonEmpty::from_vec(name.iter().map(|part| part.to_string()).collect())
        .expect("block name must have at least one part");
    BlockStmt::new(
        name,
        Pos::new(name_pos),
        label.map(str::to_string),
        Body::new(body),
        Pos::new(lcurly),
        Pos::new(rcurly),
    )
}

/// The tree a parser produces for `a = 1`.
pub fn one_line_file() -> File {
    File::new(
        "one.river",
        Body::new(vec![attr(ident("a", 0), number("1", 4))]),
        Vec::new(),
    )
}

/// The tree a parser produces for [`MAIN_SOURCE`].
pub fn main_file() -> File {
    let array = ArrayExpr::new(
        vec![
            ident("x", 42).into(),
            AccessExpr::new(ident("y", 45), ident("z", 47)).into(),
        ],
        Pos::new(41),
        Pos::new(48),
    );

    File::new(
        "main.river",
        Body::new(vec![
            attr(ident("a", 17), number("1", 21)),
            block(
                &["foo"],
                23,
                Some("bar"),
                vec![attr(ident("b", 37), array)],
                33,
                50,
            )
            .into(),
        ]),
        vec![CommentGroup::new(vec![Comment::new(
            Pos::new(0),
            "// Scrape config",
        )])],
    )
}
