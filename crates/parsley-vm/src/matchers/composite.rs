//! Ordered composition: `Sequence` and `FirstOf`.

use parsley_core::{Characters, InputChar};

use crate::engine::{ContextView, FollowRule, Grammar, MatcherContext, ParserError, Rule, RuleId};

/// Union of the starter sets of `rules` as a sequence: stops at the first
/// rule that cannot match empty, and contains `Empty` only if none can.
pub(crate) fn sequence_starters<V>(grammar: &Grammar<V>, rules: &[RuleId]) -> Characters {
    let mut chars = Characters::none();
    for &id in rules {
        let starters = grammar.rule(id).starter_chars(grammar);
        chars = chars.union(&starters.clone().without(InputChar::Empty));
        if !starters.contains(InputChar::Empty) {
            return chars;
        }
    }
    chars.with(InputChar::Empty)
}

const SEQUENCE: &str = "Sequence";

/// Matches its children one after another.
///
/// Children inherit the sequence's enforcement, except the first one
/// inside a leaf (see [`MatcherContext::enforce_first`]). An unenforced
/// sequence that fails part way fails as a whole, so an enclosing choice
/// backtracks to its next alternative. The index of the running child is
/// kept in the context's int tag, which is what the follower computation
/// reads.
#[derive(Debug)]
pub struct Sequence {
    children: Vec<RuleId>,
    label: String,
}

impl Sequence {
    pub fn new(children: Vec<RuleId>) -> Self {
        Self::labeled(SEQUENCE, children)
    }

    pub fn labeled(label: impl Into<String>, children: Vec<RuleId>) -> Self {
        Self {
            children,
            label: label.into(),
        }
    }

    pub fn children(&self) -> &[RuleId] {
        &self.children
    }
}

impl<V: Clone> Rule<V> for Sequence {
    fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        for (i, &child) in self.children.iter().enumerate() {
            context.set_int_tag(i);
            let enforced = if i == 0 {
                context.enforce_first()
            } else {
                context.is_enforced()
            };
            if !context.run_matcher(child, enforced)? {
                return Ok(false);
            }
        }
        context.create_node();
        Ok(true)
    }

    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters {
        sequence_starters(grammar, &self.children)
    }

    /// The label if one was given, else what the first child that cannot
    /// match empty expects.
    fn expected(&self, grammar: &Grammar<V>) -> String {
        if self.label != SEQUENCE {
            return self.label.clone();
        }
        self.children
            .iter()
            .map(|&id| grammar.rule(id))
            .find(|rule| !rule.starter_chars(grammar).contains(InputChar::Empty))
            .map_or_else(|| self.label.clone(), |rule| rule.expected(grammar))
    }

    fn as_follower(&self) -> Option<&dyn FollowRule<V>> {
        Some(self)
    }
}

impl<V> FollowRule<V> for Sequence {
    fn follower_chars(&self, context: &ContextView<'_, '_, V>) -> Characters {
        let rest = self.children.get(context.int_tag() + 1..).unwrap_or(&[]);
        sequence_starters(context.grammar(), rest)
    }
}

/// Ordered choice: the first child that matches wins.
#[derive(Debug)]
pub struct FirstOf {
    children: Vec<RuleId>,
}

impl FirstOf {
    pub fn new(children: Vec<RuleId>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[RuleId] {
        &self.children
    }
}

impl<V: Clone> Rule<V> for FirstOf {
    fn label(&self) -> &str {
        "FirstOf"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        for &child in &self.children {
            if context.run_matcher(child, false)? {
                context.create_node();
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn starter_chars(&self, grammar: &Grammar<V>) -> Characters {
        self.children
            .iter()
            .fold(Characters::none(), |chars, &id| {
                chars.union(&grammar.rule(id).starter_chars(grammar))
            })
    }

    fn expected(&self, grammar: &Grammar<V>) -> String {
        let alternatives: Vec<String> = self
            .children
            .iter()
            .map(|&id| grammar.rule(id).expected(grammar))
            .collect();
        alternatives.join(" or ")
    }
}
