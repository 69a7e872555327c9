//! Capability contract between the engine and grammar rules.

use std::fmt;

use parsley_core::Characters;

use super::context::{ContextView, MatcherContext};
use super::error::ParserError;
use super::grammar::Grammar;

/// Index of a rule inside its `Grammar`.
///
/// Rules refer to each other by id, so recursive grammars are plain
/// cycles of ids rather than cycles of owned values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub(crate) u32);

impl RuleId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grammar rule executed by the engine.
///
/// `matches` runs with the context bound to this invocation: it reads
/// and advances the cursor, runs sub-rules through
/// [`MatcherContext::run_matcher`], and calls
/// [`MatcherContext::create_node`] on success. Given the same context
/// state it must produce the same outcome, since error recovery may
/// retry it.
///
/// Capability queries (`is_action`, `is_test`, `as_follower`) are asked of
/// the rule reached by following `target` links, so transparent wrappers
/// never hide them.
pub trait Rule<V>: fmt::Debug {
    fn label(&self) -> &str;

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError>;

    /// Terminal rules: nothing below them builds tree nodes, and they are
    /// the only rules eligible for single-symbol deletion.
    fn is_leaf(&self) -> bool {
        false
    }

    /// Chars a match can begin with; `Empty` if it can match nothing.
    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters;

    /// Description used in "expected ..." messages.
    fn expected(&self, _grammar: &Grammar<V>) -> String {
        self.label().to_owned()
    }

    /// Wrapped rule, for transparent wrappers.
    fn target(&self) -> Option<RuleId> {
        None
    }

    /// Actions run on the caller's context: no node, no recovery.
    fn is_action(&self) -> bool {
        false
    }

    /// Lookahead rules never attach nodes and mark their subtree as
    /// "in predicate".
    fn is_test(&self) -> bool {
        false
    }

    fn as_follower(&self) -> Option<&dyn FollowRule<V>> {
        None
    }
}

/// Rules that know which chars may legally follow the sub-rule currently
/// running under them.
pub trait FollowRule<V> {
    /// Follower chars for the child active in `context` (the context
    /// bound to this rule). Contains `Empty` when whatever follows this
    /// rule itself may follow as well.
    fn follower_chars(&self, context: &ContextView<'_, '_, V>) -> Characters;
}
