/// Options for rendering trees with [`TreePrinter`](crate::dump::TreePrinter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Append `[start-end]` offsets to every node.
    pub show_positions: bool,
    /// Render the file's comment groups after its body.
    pub show_comments: bool,
    /// Colorize node kinds and positions for terminal output.
    pub use_color: bool,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_positions: true,
            show_comments: true,
            use_color: false,
            indent: 2,
        }
    }
}

impl Config {
    pub fn with_positions(mut self, show_positions: bool) -> Self {
        self.show_positions = show_positions;
        self
    }

    pub fn with_comments(mut self, show_comments: bool) -> Self {
        self.show_comments = show_comments;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
