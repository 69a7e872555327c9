//! User code run in the middle of a match.

use std::fmt;

use parsley_core::{Characters, InputChar};

use crate::engine::{Grammar, MatcherContext, ParserError, Rule};

pub type ActionFn<V> =
    Box<dyn Fn(&mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError>>;

/// Runs a closure on the caller's context.
///
/// The closure sees the enclosing rule's state: its sub nodes so far, its
/// value slot, its cursor. Returning `Ok(false)` fails the enclosing match
/// like any other rule; `Err` aborts the run.
pub struct Action<V> {
    label: String,
    action: ActionFn<V>,
}

impl<V> Action<V> {
    pub fn new(
        label: impl Into<String>,
        action: impl Fn(&mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }
}

impl<V> fmt::Debug for Action<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("label", &self.label).finish()
    }
}

impl<V> Rule<V> for Action<V> {
    fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, context: &mut MatcherContext<'_, '_, V>) -> Result<bool, ParserError> {
        (self.action)(context)
    }

    fn starter_chars(&self, _grammar: &Grammar<V>) -> Characters {
        Characters::of([InputChar::Empty])
    }

    fn is_action(&self) -> bool {
        true
    }
}
