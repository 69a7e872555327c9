//! Named transparent wrapper.

use parsley_core::Characters;

use crate::engine::{Grammar, MatcherContext, ParserError, Rule, RuleId};

/// Gives a rule a name, and optionally leaf status, without changing what
/// it matches. Capability queries see through it via `target`.
///
/// Forward declarations resolve to a `Proxy` too, which is how recursive
/// grammars close their cycles.
#[derive(Debug)]
pub struct Proxy {
    label: String,
    target: RuleId,
    leaf: bool,
}

impl Proxy {
    pub fn new(label: impl Into<String>, target: RuleId) -> Self {
        Self {
            label: label.into(),
            target,
            leaf: false,
        }
    }

    /// Suppress tree nodes below this rule.
    pub fn leaf(mut self) -> Self {
        self.leaf = true;
        self
    }
}

impl<V> Rule<V> for Proxy {
    fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        context.grammar().rule(self.target).matches(context)
    }

    fn is_leaf(&self) -> bool {
        self.leaf
    }

    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters {
        grammar.rule(self.target).starter_chars(grammar)
    }

    fn target(&self) -> Option<RuleId> {
        Some(self.target)
    }
}
