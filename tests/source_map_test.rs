mod common;

use common::*;
use river_ast::{Body, ErrorKind, File, Node, NodeExt, Pos, SourceFile, Spanned};

#[test]
fn test_block_span_to_lines() {
    let file = main_file();
    let source = SourceFile::new(&file.name, MAIN_SOURCE);
    assert_eq!(source.name(), "main.river");

    let span = source.span(&file.body[1]).unwrap();
    assert_eq!((span.start.line, span.start.column), (3, 1));
    assert_eq!((span.end.line, span.end.column), (5, 1));
    assert_eq!(span.to_string(), "main.river:3:1-5:1");
}

#[test]
fn test_nested_attribute() {
    let file = main_file();
    let source = SourceFile::new("main.river", MAIN_SOURCE);

    let name = Node::from(&file)
        .node_at(Pos::new(37))
        .expect("identifier at offset 37");
    assert_eq!(source.span(&name).unwrap().to_string(), "main.river:4:3");
}

#[test]
fn test_comment_span() {
    let file = main_file();
    let source = SourceFile::new("main.river", MAIN_SOURCE);

    let span = source.span(&file.comments[0]).unwrap();
    assert_eq!(span.to_string(), "main.river:1:1-1:16");
}

#[test]
fn test_every_node_resolves() {
    let file = main_file();
    let source = SourceFile::new("main.river", MAIN_SOURCE);
    assert_eq!(source.line_count(), 6);

    let result = Node::from(&file).walk(&mut |node| source.span(&node).map(|_| ()));
    assert!(result.is_ok());
}

#[test]
fn test_empty_file_has_no_location() {
    let file = File::new("empty.river", Body::default(), Vec::new());
    let source = SourceFile::new("empty.river", "");

    assert_eq!(file.start_pos(), Pos::NONE);
    let error = source.span(&file).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidPosition);
}
