//! Parsley: PEG parsing with error recovery.
//!
//! Grammars are assembled with a [`GrammarBuilder`] and run by a [`Parser`].
//! Every run produces a tree, even over broken input: failed enforced rules
//! are recovered by deleting a char, inserting a virtual match or skipping
//! to a follower, and each repair is reported as a [`ParseError`].
//!
//! # Example
//!
//! ```
//! use parsley_lib::{Grammar, Parser};
//!
//! let mut b = Grammar::<()>::builder();
//! let digit = b.char_range('0', '9').expect("valid range");
//! let digits = b.one_or_more(digit);
//! let number = b.rule("Number", digits).expect("fresh name");
//! let grammar = b.build(number).expect("valid grammar");
//!
//! let result = Parser::new(&grammar).parse("42").expect("no engine fault");
//! assert!(result.is_clean());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;
pub mod tree;

#[cfg(test)]
mod test_grammars;

pub use diagnostics::DiagnosticsPrinter;
pub use parser::{Parser, ParserBuilder, ParsingResult};
pub use tree::{ErrorDump, NodeDump, ParseDump, TreePrinter};

pub use parsley_core::{Characters, Colors, InputBuffer, InputChar, InputLocation, Position, Style};
pub use parsley_vm::engine::{find_node, find_node_by_label, find_node_by_path, walk};
pub use parsley_vm::matchers;
pub use parsley_vm::{
    Grammar, GrammarBuilder, GrammarError, ILLEGAL, MatcherContext, Node, NodeRef, NoopTracer,
    ParseError, ParseErrors, ParserError, PrintTracer, Rule, RuleId, RunLimits, Tracer, Verbosity,
};

/// Errors that can occur while building or running a parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The grammar could not be assembled.
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),

    /// The run aborted: a rule fault, a broken rule contract or the
    /// recursion limit.
    #[error(transparent)]
    Parser(#[from] ParserError),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
