mod common;

use common::*;
use river_ast::{BinaryExpr, CallExpr, Node, NodeExt, ObjectExpr, ObjectField, Pos, Token};

fn kinds(nodes: &[Node<'_>]) -> Vec<&'static str> {
    nodes.iter().map(Node::kind_name).collect()
}

#[test]
fn test_walk_pre_order() {
    let file = main_file();

    let mut visited = Vec::new();
    let result = Node::from(&file).walk(&mut |node| {
        visited.push(node.kind_name());
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(
        visited,
        vec![
            "File",
            "Body",
            "AttributeStmt",
            "IdentifierExpr",
            "LiteralExpr",
            "BlockStmt",
            "Body",
            "AttributeStmt",
            "IdentifierExpr",
            "ArrayExpr",
            "IdentifierExpr",
            "AccessExpr",
            "IdentifierExpr",
            "IdentifierExpr",
            "CommentGroup",
            "Comment",
        ]
    );
}

#[test]
fn test_walk_post_order() {
    // 1 + 2
    let expr = BinaryExpr::new(Token::Add, Pos::new(2), number("1", 0), number("2", 4));

    let mut visited = Vec::new();
    let result = Node::from(&expr).walk_post(&mut |node| {
        match node {
            Node::Literal(literal) => visited.push(literal.value.clone()),
            other => visited.push(other.kind_name().to_string()),
        }
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(visited, vec!["1", "2", "BinaryExpr"]);
}

#[test]
fn test_walk_early_exit() {
    let file = main_file();

    let mut visited = 0;
    let result = Node::from(&file).walk(&mut |node| {
        visited += 1;
        if matches!(node, Node::Block(_)) {
            Err(node.kind_name())
        } else {
            Ok(())
        }
    });

    assert_eq!(result, Err("BlockStmt"));
    assert_eq!(visited, 6);
}

#[test]
fn test_children_in_source_order() {
    // f(a, b)
    let call = CallExpr::new(
        ident("f", 0),
        vec![ident("a", 2).into(), ident("b", 5).into()],
        Pos::new(1),
        Pos::new(6),
    );
    let children = Node::from(&call).children();
    let names: Vec<_> = children
        .iter()
        .map(|child| match child {
            Node::Identifier(id) => id.name.as_str(),
            _ => "?",
        })
        .collect();
    assert_eq!(names, vec!["f", "a", "b"]);
}

#[test]
fn test_object_children() {
    // { a = 1, "b" = 2 }
    let object = ObjectExpr::new(
        vec![
            ObjectField::new(ident("a", 2), false, number("1", 6)),
            ObjectField::new(ident("b", 9), true, number("2", 15)),
        ],
        Pos::new(0),
        Pos::new(17),
    );
    assert_eq!(
        kinds(&Node::from(&object).children()),
        vec![
            "IdentifierExpr",
            "LiteralExpr",
            "IdentifierExpr",
            "LiteralExpr"
        ]
    );
}

#[test]
fn test_find_nodes() {
    let file = main_file();
    let identifiers = Node::from(&file).find_nodes(|node| matches!(node, Node::Identifier(_)));
    let names: Vec<_> = identifiers
        .iter()
        .filter_map(|node| match node {
            Node::Identifier(id) => Some(id.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["a", "b", "x", "y", "z"]);

    let statements = Node::from(&file).find_nodes(|node| node.is_stmt());
    assert_eq!(statements.len(), 3);
}

#[test]
fn test_node_at() {
    let file = main_file();
    let root = Node::from(&file);

    // `z` in `y.z`
    match root.node_at(Pos::new(47)) {
        Some(Node::Identifier(id)) => assert_eq!(id.name, "z"),
        other => panic!("unexpected node: {:?}", other.map(|n| n.kind_name())),
    }

    // The `.` between `y` and `z` only belongs to the access expression.
    assert!(matches!(root.node_at(Pos::new(46)), Some(Node::Access(_))));

    // `{` of the block
    assert!(matches!(root.node_at(Pos::new(33)), Some(Node::Block(_))));

    // Inside the leading comment
    assert!(matches!(root.node_at(Pos::new(3)), Some(Node::Comment(_))));

    assert_eq!(root.node_at(Pos::new(500)), None);
    assert_eq!(root.node_at(Pos::NONE), None);
}
