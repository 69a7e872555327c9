#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Matching engine and standard matchers for Parsley grammars.
//!
//! `engine` executes a `Grammar` (an arena of rules addressed by `RuleId`)
//! against an input buffer. `matchers` provides the rules grammars are
//! built from, plus `GrammarBuilder` combinators for them.

pub mod engine;
pub mod matchers;

#[cfg(test)]
mod test_utils;

// Re-export commonly used items at crate root
pub use engine::{
    ContextView, FollowRule, Grammar, GrammarBuilder, GrammarError, ILLEGAL, MatcherContext,
    Node, NodeRef, NoopTracer, ParseError, ParseErrors, ParseRun, ParserError, PrintTracer,
    Recovery, Rule, RuleId, RunLimits, RunOutcome, Tracer, Verbosity,
};
