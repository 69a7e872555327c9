//! Errors produced while matching.
//!
//! Two families:
//! - `ParseError`: recoverable syntax errors, collected in `ParseErrors`
//! - `ParserError`: faults that abort the run

use std::error::Error as StdError;
use std::fmt;

use parsley_core::{InputBuffer, InputLocation, Position};

use super::node::NodeRef;

type BoxedError = Box<dyn StdError + Send + Sync>;

/// Fault that aborts a run.
///
/// Rule code raises `Fault`. The engine wraps it exactly once into `Rule`,
/// adding the context path and input position; every other variant is
/// already classified and bubbles up unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// Raised by rule or action logic, not yet located.
    #[error("{0}")]
    Fault(BoxedError),

    /// Contract violation by a rule or the grammar.
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Context chain grew past the configured limit.
    #[error("recursion limit exceeded ({0} levels)")]
    RecursionLimitExceeded(u32),

    #[error("error during execution of parsing {kind} '{path}' at input position {position}")]
    Rule {
        kind: &'static str,
        path: String,
        position: Position,
        #[source]
        source: BoxedError,
    },
}

impl ParserError {
    pub fn fault(error: impl Into<BoxedError>) -> Self {
        ParserError::Fault(error.into())
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        ParserError::Invariant(message.into())
    }

    /// False only for faults that still need path and position attached.
    pub fn is_classified(&self) -> bool {
        !matches!(self, ParserError::Fault(_))
    }
}

/// Recoverable syntax error.
pub struct ParseError<V> {
    start: InputLocation,
    end: InputLocation,
    node: Option<NodeRef<V>>,
    message: String,
}

impl<V> ParseError<V> {
    pub fn new(
        start: InputLocation,
        end: InputLocation,
        node: Option<NodeRef<V>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            node,
            message: message.into(),
        }
    }

    /// Location of the offending input.
    pub fn start(&self) -> InputLocation {
        self.start
    }

    /// Location where recovery resumed.
    pub fn end(&self) -> InputLocation {
        self.end
    }

    /// Node built by the failing rule, if any.
    pub fn node(&self) -> Option<&NodeRef<V>> {
        self.node.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self, input: &InputBuffer) -> Position {
        input.position(self.start.index)
    }

    /// Message followed by the position of the offending input.
    pub fn describe(&self, input: &InputBuffer) -> String {
        format!("{} ({})", self.message, self.position(input))
    }
}

impl<V> fmt::Debug for ParseError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("start", &self.start.index)
            .field("end", &self.end.index)
            .field("message", &self.message)
            .finish()
    }
}

impl<V> fmt::Display for ParseError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Run-wide error list, at most one error per start index.
pub struct ParseErrors<V>(Vec<ParseError<V>>);

impl<V> ParseErrors<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append unless an error already starts at the same index.
    ///
    /// Returns whether the error was kept.
    pub fn push(&mut self, error: ParseError<V>) -> bool {
        if self.0.iter().any(|e| e.start.index == error.start.index) {
            return false;
        }
        self.0.push(error);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError<V>> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ParseError<V>] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ParseError<V>> {
        self.0
    }
}

impl<V> Default for ParseErrors<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ParseErrors<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'e, V> IntoIterator for &'e ParseErrors<V> {
    type Item = &'e ParseError<V>;
    type IntoIter = std::slice::Iter<'e, ParseError<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
