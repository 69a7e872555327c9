//! Optional and repeated matches.

use parsley_core::{Characters, InputChar};

use crate::engine::{ContextView, FollowRule, Grammar, MatcherContext, ParserError, Rule, RuleId};

/// Follower set inside a repetition: another round, or whatever follows.
fn repeat_followers<V>(grammar: &Grammar<V>, sub: RuleId) -> Characters {
    grammar.rule(sub).starter_chars(grammar).with(InputChar::Empty)
}

/// Run `sub` until it fails or stops consuming input.
fn repeat<V: Clone>(
    context: &mut MatcherContext<'_, '_, V>,
    sub: RuleId,
) -> Result<(), ParserError> {
    loop {
        let before = context.current_location();
        if !context.run_matcher(sub, false)? || context.current_location() == before {
            return Ok(());
        }
    }
}

/// Matches `sub` or nothing.
#[derive(Debug)]
pub struct Optional {
    sub: RuleId,
}

impl Optional {
    pub fn new(sub: RuleId) -> Self {
        Self { sub }
    }
}

impl<V: Clone> Rule<V> for Optional {
    fn label(&self) -> &str {
        "Optional"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        context.run_matcher(self.sub, false)?;
        context.create_node();
        Ok(true)
    }

    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters {
        grammar
            .rule(self.sub)
            .starter_chars(grammar)
            .with(InputChar::Empty)
    }
}

/// Matches `sub` as often as possible, possibly never.
#[derive(Debug)]
pub struct ZeroOrMore {
    sub: RuleId,
}

impl ZeroOrMore {
    pub fn new(sub: RuleId) -> Self {
        Self { sub }
    }
}

impl<V: Clone> Rule<V> for ZeroOrMore {
    fn label(&self) -> &str {
        "ZeroOrMore"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        repeat(context, self.sub)?;
        context.create_node();
        Ok(true)
    }

    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters {
        repeat_followers(grammar, self.sub)
    }

    fn as_follower(&self) -> Option<&dyn FollowRule<V>> {
        Some(self)
    }
}

impl<V> FollowRule<V> for ZeroOrMore {
    fn follower_chars(&self, context: &ContextView<'_, '_, V>) -> Characters {
        repeat_followers(context.grammar(), self.sub)
    }
}

/// Matches `sub` at least once. Only the first round is enforced.
#[derive(Debug)]
pub struct OneOrMore {
    sub: RuleId,
}

impl OneOrMore {
    pub fn new(sub: RuleId) -> Self {
        Self { sub }
    }
}

impl<V: Clone> Rule<V> for OneOrMore {
    fn label(&self) -> &str {
        "OneOrMore"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        let before = context.current_location();
        let enforced = context.enforce_first();
        if !context.run_matcher(self.sub, enforced)? {
            return Ok(false);
        }
        if context.current_location() != before {
            repeat(context, self.sub)?;
        }
        context.create_node();
        Ok(true)
    }

    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters {
        grammar.rule(self.sub).starter_chars(grammar)
    }

    fn as_follower(&self) -> Option<&dyn FollowRule<V>> {
        Some(self)
    }
}

impl<V> FollowRule<V> for OneOrMore {
    fn follower_chars(&self, context: &ContextView<'_, '_, V>) -> Characters {
        repeat_followers(context.grammar(), self.sub)
    }
}
