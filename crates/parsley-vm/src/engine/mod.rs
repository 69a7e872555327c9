//! Matching engine for PEG rule graphs.
//!
//! Rules run recursively over an input buffer through `MatcherContext`,
//! which builds the parse tree as rules finish and recovers from syntax
//! errors instead of stopping at the first mismatch.

mod context;
mod error;
mod frame;
mod grammar;
mod node;
mod recovery;
mod rule;
mod trace;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod node_tests;

pub use context::{ContextView, MatcherContext, ParseRun, RunLimits, RunOutcome};
pub use error::{ParseError, ParseErrors, ParserError};
pub use grammar::{Grammar, GrammarBuilder, GrammarError};
pub use node::{ILLEGAL, Node, NodeRef, find_node, find_node_by_label, find_node_by_path, walk};
pub use rule::{FollowRule, Rule, RuleId};
pub use trace::{NoopTracer, PrintTracer, Recovery, Tracer, Verbosity};
