//! `GrammarBuilder` shorthands for the standard matchers.

use parsley_core::Characters;

use super::{
    Action, Any, AnyOf, Char, CharRange, Empty, Eoi, FirstOf, OneOrMore, Optional, Proxy, Sequence,
    Test, ZeroOrMore,
};
use crate::engine::{GrammarBuilder, GrammarError, MatcherContext, ParserError, RuleId};

impl<V: Clone + 'static> GrammarBuilder<V> {
    pub fn ch(&mut self, c: char) -> RuleId {
        self.add(Char::new(c))
    }

    pub fn char_range(&mut self, low: char, high: char) -> Result<RuleId, GrammarError> {
        if low > high {
            return Err(GrammarError::InvalidRange(low, high));
        }
        Ok(self.add(CharRange::new(low, high)))
    }

    pub fn any_of(&mut self, chars: &str) -> RuleId {
        self.add(AnyOf::new(Characters::of(chars.chars().map(Into::into))))
    }

    pub fn none_of(&mut self, chars: &str) -> RuleId {
        self.add(AnyOf::new(Characters::all_but(chars.chars().map(Into::into))))
    }

    pub fn any(&mut self) -> RuleId {
        self.add(Any)
    }

    pub fn eoi(&mut self) -> RuleId {
        self.add(Eoi)
    }

    pub fn empty(&mut self) -> RuleId {
        self.add(Empty)
    }

    /// Literal text: a leaf over a sequence of single chars, labeled with
    /// the quoted text.
    pub fn string(&mut self, text: &str) -> Result<RuleId, GrammarError> {
        let mut chars = text.chars().map(|c| self.ch(c)).collect::<Vec<_>>();
        match chars.len() {
            0 => return Err(GrammarError::EmptyComposite("string")),
            1 => return Ok(chars.remove(0)),
            _ => {}
        }
        let label = format!("{text:?}");
        let body = self.add(Sequence::labeled(label.clone(), chars));
        Ok(self.add(Proxy::new(label, body).leaf()))
    }

    pub fn seq(&mut self, children: &[RuleId]) -> Result<RuleId, GrammarError> {
        if children.is_empty() {
            return Err(GrammarError::EmptyComposite("sequence"));
        }
        Ok(self.add(Sequence::new(children.to_vec())))
    }

    pub fn first_of(&mut self, children: &[RuleId]) -> Result<RuleId, GrammarError> {
        if children.is_empty() {
            return Err(GrammarError::EmptyComposite("choice"));
        }
        Ok(self.add(FirstOf::new(children.to_vec())))
    }

    pub fn optional(&mut self, sub: RuleId) -> RuleId {
        self.add(Optional::new(sub))
    }

    pub fn zero_or_more(&mut self, sub: RuleId) -> RuleId {
        self.add(ZeroOrMore::new(sub))
    }

    pub fn one_or_more(&mut self, sub: RuleId) -> RuleId {
        self.add(OneOrMore::new(sub))
    }

    pub fn test(&mut self, sub: RuleId) -> RuleId {
        self.add(Test::new(sub))
    }

    pub fn test_not(&mut self, sub: RuleId) -> RuleId {
        self.add(Test::not(sub))
    }

    pub fn action(
        &mut self,
        label: &str,
        action: impl Fn(&mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> + 'static,
    ) -> RuleId {
        self.add(Action::new(label, action))
    }
}
