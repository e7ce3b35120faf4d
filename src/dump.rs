//! Inspection output for trees.
//!
//! [`TreePrinter`] renders a deterministic, indented outline of a tree with
//! the span of every node, which is what the tests snapshot. [`to_json`] and
//! [`from_json`] exchange whole files with other tools.

use std::fmt::Write as _;

use colored::Colorize;

use crate::ast::{File, Node, NodeExt, Spanned};
use crate::config::Config;
use crate::debug_println;
use crate::error::Result;

/// Renders a tree as one line per node.
#[derive(Debug, Default)]
pub struct TreePrinter {
    config: Config,
    buffer: String,
    nodes: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            buffer: String::new(),
            nodes: 0,
        }
    }

    /// Render `node` and everything below it.
    pub fn print<'a>(mut self, node: impl Into<Node<'a>>) -> String {
        self.write_node(node.into(), 0);
        debug_println!("dump: rendered {} node(s)", self.nodes);
        self.buffer
    }

    fn write_node(&mut self, node: Node<'_>, depth: usize) {
        self.nodes += 1;
        self.write_line(depth, node.kind_name(), &detail(node), Some(node));

        if let Node::Object(object) = node {
            for field in &object.fields {
                let name = if field.quoted {
                    format!("{:?}", field.name.name)
                } else {
                    field.name.name.clone()
                };
                self.write_line(depth + 1, "ObjectField", &name, None);
                self.write_node(Node::Identifier(&field.name), depth + 2);
                self.write_node(field.value.as_node(), depth + 2);
            }
            return;
        }

        for child in node.children() {
            if matches!(child, Node::CommentGroup(_)) && !self.config.show_comments {
                continue;
            }
            self.write_node(child, depth + 1);
        }
    }

    fn write_line(&mut self, depth: usize, kind: &str, detail: &str, node: Option<Node<'_>>) {
        let indent = " ".repeat(depth * self.config.indent);
        let kind = if self.config.use_color {
            kind.cyan().bold().to_string()
        } else {
            kind.to_string()
        };

        let _ = write!(self.buffer, "{}{}", indent, kind);
        if !detail.is_empty() {
            let _ = write!(self.buffer, " {}", detail);
        }

        if let Some(node) = node.filter(|_| self.config.show_positions) {
            let span = format!("[{}]", node.span());
            if self.config.use_color {
                let _ = write!(self.buffer, " {}", span.dimmed());
            } else {
                let _ = write!(self.buffer, " {}", span);
            }
        }

        self.buffer.push('\n');
    }
}

/// The per-kind text that follows a node's kind name.
fn detail(node: Node<'_>) -> String {
    match node {
        Node::File(file) => format!("{:?}", file.name),
        Node::Comment(comment) => format!("{:?}", comment.text),
        Node::Block(block) => match &block.label {
            Some(label) => format!("{} {:?}", block.full_name(), label),
            None => block.full_name(),
        },
        Node::Identifier(expr) => expr.name.clone(),
        Node::Literal(expr) => format!("{} {}", expr.kind, expr.value),
        Node::Unary(expr) => expr.kind.to_string(),
        Node::Binary(expr) => expr.kind.to_string(),
        Node::Body(_)
        | Node::CommentGroup(_)
        | Node::Attribute(_)
        | Node::Array(_)
        | Node::Object(_)
        | Node::Access(_)
        | Node::Index(_)
        | Node::Call(_)
        | Node::Paren(_) => String::new(),
    }
}

/// Render `file` with the default configuration.
pub fn format_file(file: &File) -> String {
    TreePrinter::new().print(file)
}

/// Serialize `file` as pretty-printed JSON.
pub fn to_json(file: &File) -> Result<String> {
    let json = serde_json::to_string_pretty(file)?;
    debug_println!("dump: serialized '{}' ({} bytes)", file.name, json.len());
    Ok(json)
}

/// Deserialize a file previously produced by [`to_json`].
pub fn from_json(json: &str) -> Result<File> {
    Ok(serde_json::from_str(json)?)
}
