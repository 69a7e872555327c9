//! Standard matchers.
//!
//! - terminals: `Char`, `CharRange`, `AnyOf`, `Any`, `Eoi`, `Empty`
//! - composition: `Sequence`, `FirstOf`
//! - repetition: `Optional`, `ZeroOrMore`, `OneOrMore`
//! - lookahead: `Test`
//! - side effects: `Action`
//! - naming and forward references: `Proxy`
//!
//! Grammars are usually assembled through the `GrammarBuilder` shorthands
//! in `builder`.

mod action;
mod builder;
mod composite;
mod predicate;
mod proxy;
mod repeat;
mod terminal;

#[cfg(test)]
mod composite_tests;

pub use action::{Action, ActionFn};
pub use composite::{FirstOf, Sequence};
pub use predicate::Test;
pub use proxy::Proxy;
pub use repeat::{OneOrMore, Optional, ZeroOrMore};
pub use terminal::{Any, AnyOf, Char, CharRange, Empty, Eoi};
