//! Parse tree nodes and lookup helpers.

use std::fmt;
use std::rc::Rc;

use parsley_core::{InputBuffer, InputChar, InputLocation};

/// Label of the synthetic nodes marking input skipped or inserted by recovery.
pub const ILLEGAL: &str = "ILLEGAL";

/// Shared handle to a finished node.
///
/// A node is referenced by its parent's child list and, transiently, by the
/// run's last-node slot and the frame that built it.
pub type NodeRef<V> = Rc<Node<V>>;

/// Immutable parse tree node.
pub struct Node<V> {
    label: String,
    children: Vec<NodeRef<V>>,
    start: InputLocation,
    end: InputLocation,
    value: Option<V>,
}

impl<V> Node<V> {
    pub fn new(
        label: impl Into<String>,
        children: Vec<NodeRef<V>>,
        start: InputLocation,
        end: InputLocation,
        value: Option<V>,
    ) -> Self {
        Self {
            label: label.into(),
            children,
            start,
            end,
            value,
        }
    }

    pub fn illegal(start: InputLocation, end: InputLocation) -> Self {
        Self::new(ILLEGAL, Vec::new(), start, end, None)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[NodeRef<V>] {
        &self.children
    }

    pub fn start(&self) -> InputLocation {
        self.start
    }

    pub fn end(&self) -> InputLocation {
        self.end
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn is_illegal(&self) -> bool {
        self.label == ILLEGAL
    }

    pub fn text<'i>(&self, input: &'i InputBuffer) -> &'i str {
        input.extract(self.start.index, self.end.index)
    }

    /// First char of the matched span, `Eoi` for empty spans.
    pub fn first_char(&self, input: &InputBuffer) -> InputChar {
        if self.end.index <= self.start.index {
            return InputChar::Eoi;
        }
        input.char_at(self.start.index)
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("label", &self.label)
            .field("span", &(self.start.index..self.end.index))
            .field("value", &self.value)
            .field("children", &self.children)
            .finish()
    }
}

/// Depth-first search, parents before children.
pub fn find_node<'n, V>(
    nodes: &'n [NodeRef<V>],
    predicate: &impl Fn(&Node<V>) -> bool,
) -> Option<&'n NodeRef<V>> {
    for node in nodes {
        if predicate(node) {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), predicate) {
            return Some(found);
        }
    }
    None
}

/// First node (depth-first) whose label starts with `prefix`.
pub fn find_node_by_label<'n, V>(nodes: &'n [NodeRef<V>], prefix: &str) -> Option<&'n NodeRef<V>> {
    find_node(nodes, &|node: &Node<V>| node.label.starts_with(prefix))
}

/// Follow a `/`-separated chain of label prefixes, one tree level per segment.
pub fn find_node_by_path<'n, V>(nodes: &'n [NodeRef<V>], path: &str) -> Option<&'n NodeRef<V>> {
    let (head, rest) = match path.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    for node in nodes {
        if !node.label.starts_with(head) {
            continue;
        }
        let Some(rest) = rest else {
            return Some(node);
        };
        if let Some(found) = find_node_by_path(node.children(), rest) {
            return Some(found);
        }
    }
    None
}

/// Visit `node` and all descendants depth-first, with their depth.
pub fn walk<V>(node: &NodeRef<V>, visit: &mut impl FnMut(&NodeRef<V>, usize)) {
    fn go<V>(node: &NodeRef<V>, depth: usize, visit: &mut impl FnMut(&NodeRef<V>, usize)) {
        visit(node, depth);
        for child in node.children() {
            go(child, depth + 1, visit);
        }
    }
    go(node, 0, visit);
}
