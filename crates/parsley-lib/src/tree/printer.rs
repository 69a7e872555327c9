use std::fmt::{Debug, Write};

use parsley_core::InputBuffer;
use parsley_vm::{Node, NodeRef};

/// Indented one-node-per-line rendering of a parse tree.
///
/// ```text
/// Sum = 3
///   Number = 1 "1"
///   ILLEGAL
/// ```
pub struct TreePrinter<'n, V> {
    root: &'n NodeRef<V>,
    input: &'n InputBuffer,
    spans: bool,
    values: bool,
}

impl<'n, V> TreePrinter<'n, V> {
    pub fn new(root: &'n NodeRef<V>, input: &'n InputBuffer) -> Self {
        Self {
            root,
            input,
            spans: false,
            values: true,
        }
    }

    /// Append the char range each node covers.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn with_values(mut self, value: bool) -> Self {
        self.values = value;
        self
    }

}

impl<V: Debug> TreePrinter<'_, V> {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &Node<V>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "{}{}", "  ".repeat(indent), node.label())?;
        if self.spans {
            write!(w, " [{}..{}]", node.start().index, node.end().index)?;
        }
        if self.values
            && let Some(value) = node.value()
        {
            write!(w, " = {value:?}")?;
        }
        // Childless nodes show what they matched; skipped input stays opaque.
        if node.children().is_empty() && !node.is_illegal() {
            write!(w, " {:?}", node.text(self.input))?;
        }
        writeln!(w)?;

        for child in node.children() {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }
}
