//! Single-char matchers. All of them are leaves except `Empty`.

use parsley_core::{Characters, InputChar};

use crate::engine::{Grammar, MatcherContext, ParserError, Rule};

/// Consume the current char if `accept` allows it.
fn match_one<V: Clone>(
    context: &mut MatcherContext<'_, '_, V>,
    accept: impl FnOnce(char) -> bool,
) -> bool {
    match context.current_char().as_char() {
        Some(c) if accept(c) => {
            context.advance_input_location();
            context.create_node();
            true
        }
        _ => false,
    }
}

/// Matches exactly one char.
#[derive(Debug)]
pub struct Char {
    c: char,
    label: String,
}

impl Char {
    pub fn new(c: char) -> Self {
        Self {
            c,
            label: InputChar::Char(c).to_string(),
        }
    }
}

impl<V: Clone> Rule<V> for Char {
    fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        Ok(match_one(context, |c| c == self.c))
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::of_char(self.c)
    }
}

/// Matches one char in `low..=high`.
#[derive(Debug)]
pub struct CharRange {
    low: char,
    high: char,
    label: String,
}

impl CharRange {
    pub fn new(low: char, high: char) -> Self {
        Self {
            low,
            high,
            label: format!("{}..{}", InputChar::Char(low), InputChar::Char(high)),
        }
    }
}

impl<V: Clone> Rule<V> for CharRange {
    fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        Ok(match_one(context, |c| (self.low..=self.high).contains(&c)))
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::range(self.low, self.high)
    }
}

/// Matches one char from a set.
#[derive(Debug)]
pub struct AnyOf {
    chars: Characters,
    label: String,
}

impl AnyOf {
    pub fn new(chars: Characters) -> Self {
        let chars = chars.without(InputChar::Eoi).without(InputChar::Empty);
        Self {
            label: chars.to_string(),
            chars,
        }
    }
}

impl<V: Clone> Rule<V> for AnyOf {
    fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        Ok(match_one(context, |c| self.chars.contains(InputChar::Char(c))))
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        self.chars.clone()
    }
}

/// Matches any char except end of input.
#[derive(Debug)]
pub struct Any;

impl<V: Clone> Rule<V> for Any {
    fn label(&self) -> &str {
        "ANY"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        Ok(match_one(context, |_| true))
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::all_but([InputChar::Eoi, InputChar::Empty])
    }
}

/// Matches at end of input without consuming.
#[derive(Debug)]
pub struct Eoi;

impl<V: Clone> Rule<V> for Eoi {
    fn label(&self) -> &str {
        "EOI"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        if !context.current_char().is_eoi() {
            return Ok(false);
        }
        context.create_node();
        Ok(true)
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::of([InputChar::Eoi])
    }
}

/// Always matches, consuming nothing.
#[derive(Debug)]
pub struct Empty;

impl<V: Clone> Rule<V> for Empty {
    fn label(&self) -> &str {
        "EMPTY"
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        context.create_node();
        Ok(true)
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::of([InputChar::Empty])
    }
}
