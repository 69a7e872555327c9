//! Error recovery for failed enforced invocations.
//!
//! Three tiers, tried in order:
//! 1. deletion: drop one spurious char in front of a leaf rule's input
//! 2. insertion: pretend the rule matched empty if the current char may
//!    follow it anyway
//! 3. resync: skip input up to the next follower char or end of input

use std::rc::Rc;

use parsley_core::{Characters, InputChar};

use super::context::{ContextView, MatcherContext};
use super::error::ParserError;
use super::node::Node;
use super::rule::RuleId;
use super::trace::Recovery;

impl<V: Clone> MatcherContext<'_, '_, V> {
    /// Turn the failed invocation of `rule` bound to this context into a
    /// recovered match. Only engine faults escape.
    pub(super) fn recover(&mut self, rule: RuleId) -> Result<(), ParserError> {
        if self.try_deletion(rule)? {
            return Ok(());
        }
        let followers = self.follower_chars();
        if self.try_insertion(rule, &followers) {
            return Ok(());
        }
        self.resynchronize(rule, &followers);
        Ok(())
    }

    /// Chars that may legally appear right after the rule bound here.
    ///
    /// Ancestors are asked innermost first and their answers are unioned.
    /// The walk stops as soon as the union lacks `Empty` ("whatever follows
    /// me"); a walk that reaches the top also accepts end of input.
    pub fn follower_chars(&self) -> Characters {
        let grammar = self.grammar();
        let mut chars = Characters::none();
        for level in (0..self.level).rev() {
            let Some(id) = self.run.frames[level].rule else {
                continue;
            };
            let Some(follower) = grammar.resolve(id).as_follower() else {
                continue;
            };
            let view = ContextView {
                run: &*self.run,
                level,
            };
            chars = chars.union(&follower.follower_chars(&view));
            if !chars.contains(InputChar::Empty) {
                return chars;
            }
        }
        chars.without(InputChar::Empty).with(InputChar::Eoi)
    }

    fn try_deletion(&mut self, rule: RuleId) -> Result<bool, ParserError> {
        let grammar = self.grammar();
        if !grammar.is_leaf(rule) {
            return Ok(false);
        }
        let target = grammar.rule(rule);
        let starters = target.starter_chars(grammar);
        if starters.contains(InputChar::Empty) {
            return Err(ParserError::invariant(format!(
                "leaf rule '{}' can match empty input",
                target.label()
            )));
        }

        let before = self.current_location();
        if !starters.contains(before.lookahead(self.input(), 1)) {
            return Ok(false);
        }

        let nearest = self.level.saturating_sub(1);
        let saved_start = self.frame().start;
        let saved_error = self.frame().error.clone();
        let saved_value = self.frame().node_value.clone();
        let saved_children = self.run.frames[nearest].sub_nodes().len();
        let saved_errors = self.run.errors.len();

        self.add_unexpected_input_error(before.current, &target.expected(grammar));
        self.advance_input_location();
        let after = self.current_location();
        self.add_to_nearest(Rc::new(Node::illegal(before, after)));

        self.frame_mut().start = Some(after);
        if target.matches(self)? {
            self.run
                .tracer
                .trace_recover(self.level, Recovery::Deletion, before);
            return Ok(true);
        }

        // The leaf can fail after its first char; undo and let the other
        // tiers handle it.
        self.run.errors.truncate(saved_errors);
        if let Some(children) = self.run.frames[nearest].sub_nodes.as_mut() {
            children.truncate(saved_children);
        }
        let frame = self.frame_mut();
        frame.start = saved_start;
        frame.current = before;
        frame.error = saved_error;
        frame.node_value = saved_value;
        Ok(false)
    }

    fn try_insertion(&mut self, rule: RuleId, followers: &Characters) -> bool {
        let location = self.current_location();
        if !followers.contains(location.current) {
            return false;
        }

        let grammar = self.grammar();
        self.run
            .tracer
            .trace_recover(self.level, Recovery::Insertion, location);
        self.add_unexpected_input_error(location.current, &grammar.rule(rule).expected(grammar));
        self.create_node();
        true
    }

    fn resynchronize(&mut self, rule: RuleId, followers: &Characters) {
        let grammar = self.grammar();
        let before = self.current_location();
        self.run
            .tracer
            .trace_recover(self.level, Recovery::Resync, before);
        self.create_node();
        self.add_unexpected_input_error(before.current, &grammar.rule(rule).expected(grammar));

        loop {
            self.advance_input_location();
            let current = self.current_char();
            if current.is_eoi() || followers.contains(current) {
                break;
            }
        }
        let after = self.current_location();
        self.add_to_nearest(Rc::new(Node::illegal(before, after)));
    }
}
