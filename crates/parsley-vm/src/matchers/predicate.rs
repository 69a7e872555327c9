//! Syntactic predicates: lookahead without consuming input.

use parsley_core::{Characters, InputChar};

use crate::engine::{Grammar, MatcherContext, ParserError, Rule, RuleId};

/// `&sub` (or `!sub` when inverted): succeeds if `sub` matches (does not
/// match) here, then rewinds. Never recovers and never attaches nodes.
#[derive(Debug)]
pub struct Test {
    sub: RuleId,
    inverted: bool,
}

impl Test {
    pub fn new(sub: RuleId) -> Self {
        Self {
            sub,
            inverted: false,
        }
    }

    pub fn not(sub: RuleId) -> Self {
        Self {
            sub,
            inverted: true,
        }
    }
}

impl<V: Clone> Rule<V> for Test {
    fn label(&self) -> &str {
        if self.inverted { "TestNot" } else { "Test" }
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        let start = context.current_location();
        let matched = context.run_matcher(self.sub, false)?;
        context.set_current_location(start);
        if matched == self.inverted {
            return Ok(false);
        }
        context.create_node();
        Ok(true)
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::of([InputChar::Empty])
    }

    fn expected(&self, grammar: &Grammar<V>) -> String {
        let sub = grammar.rule(self.sub).expected(grammar);
        if self.inverted { format!("not {sub}") } else { sub }
    }

    fn is_test(&self) -> bool {
        true
    }
}
