//! Read-only traversal over the tree.
//!
//! Children are always produced in source order, so pre-order walks visit
//! nodes in the order they appear in the file (comment groups last).

use std::convert::Infallible;

use super::*;

/// Extension trait for node traversal
///
/// All methods borrow from the tree for `'a`, so collected nodes can outlive
/// the `Node` value they were reached from.
pub trait NodeExt<'a> {
    /// Direct children of this node, in source order.
    fn children(&self) -> Vec<Node<'a>>;

    /// Walk the tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Node<'a>) -> Result<(), E>;

    /// Walk the tree in post-order
    ///
    /// Calls visitor on children before current node.
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Node<'a>) -> Result<(), E>;

    /// Find all nodes matching a predicate, this node included.
    fn find_nodes<F>(&self, predicate: F) -> Vec<Node<'a>>
    where
        F: Fn(Node<'a>) -> bool;

    /// The innermost node whose span contains `pos`.
    fn node_at(&self, pos: Pos) -> Option<Node<'a>>;
}

impl<'a> NodeExt<'a> for Node<'a> {
    fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::File(file) => std::iter::once(Node::Body(&file.body))
                .chain(file.comments.iter().map(Node::CommentGroup))
                .collect(),
            Node::Body(body) => body.iter().map(Stmt::as_node).collect(),
            Node::CommentGroup(group) => group.iter().map(Node::Comment).collect(),
            Node::Attribute(stmt) => vec![Node::Identifier(&stmt.name), stmt.value.as_node()],
            Node::Block(stmt) => vec![Node::Body(&stmt.body)],
            Node::Array(expr) => expr.elements.iter().map(Expr::as_node).collect(),
            Node::Object(expr) => expr
                .fields
                .iter()
                .flat_map(|field| [Node::Identifier(&field.name), field.value.as_node()])
                .collect(),
            Node::Access(expr) => vec![expr.value.as_node(), Node::Identifier(&expr.name)],
            Node::Index(expr) => vec![expr.value.as_node(), expr.index.as_node()],
            Node::Call(expr) => std::iter::once(expr.value.as_node())
                .chain(expr.args.iter().map(Expr::as_node))
                .collect(),
            Node::Unary(expr) => vec![expr.value.as_node()],
            Node::Binary(expr) => vec![expr.left.as_node(), expr.right.as_node()],
            Node::Paren(expr) => vec![expr.inner.as_node()],
            // Leaf nodes
            Node::Comment(_) | Node::Identifier(_) | Node::Literal(_) => Vec::new(),
        }
    }

    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Node<'a>) -> Result<(), E>,
    {
        visitor(*self)?;
        for child in self.children() {
            child.walk(visitor)?;
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Node<'a>) -> Result<(), E>,
    {
        for child in self.children() {
            child.walk_post(visitor)?;
        }
        visitor(*self)
    }

    fn find_nodes<F>(&self, predicate: F) -> Vec<Node<'a>>
    where
        F: Fn(Node<'a>) -> bool,
    {
        let mut results = Vec::new();
        let Ok(()) = self.walk(&mut |node| {
            if predicate(node) {
                results.push(node);
            }
            Ok::<(), Infallible>(())
        });
        results
    }

    fn node_at(&self, pos: Pos) -> Option<Node<'a>> {
        // An attribute's span covers only its name, so the whole tree is
        // visited rather than pruned by span.
        let mut innermost = None;
        let Ok(()) = self.walk(&mut |node| {
            if node.span().contains(pos) {
                innermost = Some(node);
            }
            Ok::<(), Infallible>(())
        });
        innermost
    }
}
