//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Escape special characters for quoted DOT strings.
///
/// Newlines become the DOT `\n` escape so multi-line labels stay on one line.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote a string as a DOT identifier.
pub fn quote_id(input: &str) -> String {
    format!("\"{}\"", escape_label(input))
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph writer producing one statement per line.
///
/// Attribute lists are passed pre-formatted (e.g. `[style="dotted"]`); an
/// empty string means the statement carries no attributes.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {} {{", quote_id(name));
        Self { output, indent: 1 }
    }

    /// Add a default attribute statement for all nodes.
    pub fn node_defaults(&mut self, attrs: &str) -> &mut Self {
        if !attrs.is_empty() {
            write_indent(&mut self.output, self.indent);
            let _ = writeln!(self.output, "node {attrs};");
        }
        self
    }

    /// Add a default attribute statement for all edges.
    pub fn edge_defaults(&mut self, attrs: &str) -> &mut Self {
        if !attrs.is_empty() {
            write_indent(&mut self.output, self.indent);
            let _ = writeln!(self.output, "edge {attrs};");
        }
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node statement.
    pub fn node(&mut self, id: &str, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(&quote_id(id));
        self.push_attrs(attrs);
        self
    }

    /// Add an edge statement.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{} -> {}", quote_id(from), quote_id(to));
        self.push_attrs(attrs);
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    fn push_attrs(&mut self, attrs: &str) {
        if !attrs.is_empty() {
            self.output.push(' ');
            self.output.push_str(attrs);
        }
        self.output.push_str(";\n");
    }
}
