//! Serializable views of a parsing result, borrowed from the result itself.

use parsley_core::{InputBuffer, Position};
use parsley_vm::{Node, ParseError};
use serde::Serialize;

use crate::parser::ParsingResult;

#[derive(Debug, Serialize)]
pub struct ParseDump<'r, V> {
    pub matched: bool,
    pub root: Option<NodeDump<'r, V>>,
    pub errors: Vec<ErrorDump<'r>>,
}

impl<'r, V> ParseDump<'r, V> {
    pub fn new(result: &'r ParsingResult<V>) -> Self {
        Self {
            matched: result.matched,
            root: result
                .root
                .as_ref()
                .map(|root| NodeDump::new(root, &result.input)),
            errors: result
                .errors
                .iter()
                .map(|error| ErrorDump::new(error, &result.input))
                .collect(),
        }
    }
}

/// A node with its char span. `text` is present on childless nodes only.
#[derive(Debug, Serialize)]
pub struct NodeDump<'r, V> {
    pub label: &'r str,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'r V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'r str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDump<'r, V>>,
}

impl<'r, V> NodeDump<'r, V> {
    pub fn new(node: &'r Node<V>, input: &'r InputBuffer) -> Self {
        let text = (node.children().is_empty() && !node.is_illegal()).then(|| node.text(input));
        Self {
            label: node.label(),
            start: node.start().index,
            end: node.end().index,
            value: node.value(),
            text,
            children: node
                .children()
                .iter()
                .map(|child| NodeDump::new(child, input))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDump<'r> {
    pub message: &'r str,
    pub start: usize,
    pub end: usize,
    pub position: Position,
}

impl<'r> ErrorDump<'r> {
    pub fn new<V>(error: &'r ParseError<V>, input: &InputBuffer) -> Self {
        Self {
            message: error.message(),
            start: error.start().index,
            end: error.end().index,
            position: error.position(input),
        }
    }
}
