//! Parser driver: runs a grammar over input text.

use parsley_core::InputBuffer;
use parsley_vm::{Grammar, NodeRef, NoopTracer, ParseErrors, ParseRun, RunLimits, Tracer};

use crate::Result;
use crate::diagnostics::DiagnosticsPrinter;
use crate::tree::{ParseDump, TreePrinter};

/// Runs one grammar over any number of inputs.
///
/// A parser holds no per-run state; every call to [`Parser::parse`] starts
/// from a fresh context chain.
pub struct Parser<'g, V> {
    grammar: &'g Grammar<V>,
    limits: RunLimits,
}

/// Builder for [`Parser`].
pub struct ParserBuilder<'g, V> {
    grammar: &'g Grammar<V>,
    limits: RunLimits,
}

impl<'g, V> ParserBuilder<'g, V> {
    pub fn new(grammar: &'g Grammar<V>) -> Self {
        Self {
            grammar,
            limits: RunLimits::default(),
        }
    }

    /// Set the run limits.
    pub fn limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum context depth.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    pub fn build(self) -> Parser<'g, V> {
        Parser {
            grammar: self.grammar,
            limits: self.limits,
        }
    }
}

impl<'g, V> Parser<'g, V> {
    pub fn new(grammar: &'g Grammar<V>) -> Self {
        Self::builder(grammar).build()
    }

    pub fn builder(grammar: &'g Grammar<V>) -> ParserBuilder<'g, V> {
        ParserBuilder::new(grammar)
    }

    pub fn grammar(&self) -> &'g Grammar<V> {
        self.grammar
    }

    pub fn limits(&self) -> RunLimits {
        self.limits
    }
}

impl<V: Clone> Parser<'_, V> {
    /// Parse `text` from the grammar's root rule.
    pub fn parse(&self, text: &str) -> Result<ParsingResult<V>> {
        self.parse_with(text, &mut NoopTracer)
    }

    /// Parse `text`, reporting every engine event to `tracer`.
    ///
    /// The tracer keeps whatever it recorded even when the run aborts.
    pub fn parse_with(&self, text: &str, tracer: &mut dyn Tracer) -> Result<ParsingResult<V>> {
        let input = InputBuffer::new(text);
        let outcome =
            ParseRun::new(self.grammar, &input, self.limits, tracer).run(self.grammar.root())?;

        Ok(ParsingResult {
            matched: outcome.matched,
            root: outcome.root,
            errors: outcome.errors,
            input,
        })
    }
}

/// Everything a finished run produced.
pub struct ParsingResult<V> {
    /// False only when the root rule failed without being enforced, which
    /// happens for lookahead roots.
    pub matched: bool,
    /// Node built by the root rule.
    pub root: Option<NodeRef<V>>,
    pub errors: ParseErrors<V>,
    pub input: InputBuffer,
}

impl<V> ParsingResult<V> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Matched without any recovery.
    pub fn is_clean(&self) -> bool {
        self.matched && self.errors.is_empty()
    }

    /// Value attached to the root node.
    pub fn value(&self) -> Option<&V> {
        self.root.as_ref().and_then(|root| root.value())
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn diagnostics(&self) -> DiagnosticsPrinter<'_, V> {
        DiagnosticsPrinter::new(self.errors.as_slice(), &self.input)
    }

    /// Printer for the parse tree, if the root rule built a node.
    pub fn tree(&self) -> Option<TreePrinter<'_, V>> {
        self.root
            .as_ref()
            .map(|root| TreePrinter::new(root, &self.input))
    }

    /// Serializable snapshot of the tree and the errors.
    pub fn dump(&self) -> ParseDump<'_, V> {
        ParseDump::new(self)
    }
}
