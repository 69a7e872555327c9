//! Matching contexts: dispatch into rules, tree building, run state.
//!
//! A `ParseRun` owns everything shared by one run over one input: the
//! frame arena (one `Frame` per depth of the active rule chain), the
//! deduplicated error list and the last-node slot.
//!
//! Rules never own contexts. They receive a `MatcherContext`, a handle
//! pairing the run with a level, and run sub-rules through
//! [`MatcherContext::run_matcher`], which hands the next level's handle
//! down. The chain of handles is exactly the call stack.

use std::rc::Rc;

use parsley_core::{InputBuffer, InputChar, InputLocation};

use super::error::{ParseError, ParseErrors, ParserError};
use super::frame::{Frame, PendingError};
use super::grammar::Grammar;
use super::node::{Node, NodeRef, find_node_by_label, find_node_by_path};
use super::rule::RuleId;
use super::trace::Tracer;

/// Runtime limits for a run.
#[derive(Clone, Copy, Debug)]
pub struct RunLimits {
    /// Maximum context depth (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            recursion_limit: 1024,
        }
    }
}

impl RunLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// State of one run of a grammar over one input.
pub struct ParseRun<'a, V> {
    pub(crate) grammar: &'a Grammar<V>,
    pub(crate) input: &'a InputBuffer,
    pub(crate) frames: Vec<Frame<V>>,
    pub(crate) errors: ParseErrors<V>,
    pub(crate) last_node: Option<NodeRef<V>>,
    pub(crate) limits: RunLimits,
    pub(crate) tracer: &'a mut dyn Tracer,
}

/// What a finished run leaves behind.
pub struct RunOutcome<V> {
    pub matched: bool,
    /// Node built by the root rule, if it built one.
    pub root: Option<NodeRef<V>>,
    pub errors: ParseErrors<V>,
    pub last_node: Option<NodeRef<V>>,
}

impl<'a, V> ParseRun<'a, V> {
    pub fn new(
        grammar: &'a Grammar<V>,
        input: &'a InputBuffer,
        limits: RunLimits,
        tracer: &'a mut dyn Tracer,
    ) -> Self {
        Self {
            grammar,
            input,
            frames: vec![Frame::new(InputLocation::start(input))],
            errors: ParseErrors::new(),
            last_node: None,
            limits,
            tracer,
        }
    }

    /// Handle on the root frame.
    pub fn root_context(&mut self) -> MatcherContext<'_, 'a, V> {
        MatcherContext {
            run: self,
            level: 0,
        }
    }

    pub fn errors(&self) -> &ParseErrors<V> {
        &self.errors
    }

    /// Number of frames allocated so far (the deepest level reached + 1).
    pub fn allocated_levels(&self) -> usize {
        self.frames.len()
    }

    fn add_parse_error(&mut self, level: usize, error: ParseError<V>) {
        let start = error.start();
        let message = error.message().to_owned();
        if self.errors.push(error) {
            self.tracer.trace_error(level, &message, start);
        } else {
            self.tracer.trace_error_dropped(level, start);
        }
    }
}

impl<V: Clone> ParseRun<'_, V> {
    /// Run `rule` as the root invocation, enforced.
    pub fn run(mut self, rule: RuleId) -> Result<RunOutcome<V>, ParserError> {
        let matched = self.root_context().run_matcher(rule, true)?;
        Ok(RunOutcome {
            matched,
            root: self.frames[0].node.take(),
            errors: self.errors,
            last_node: self.last_node,
        })
    }
}

/// Read-only view of a frame: a parent, or a retired child.
pub struct ContextView<'c, 'a, V> {
    pub(super) run: &'c ParseRun<'a, V>,
    pub(super) level: usize,
}

impl<V> Clone for ContextView<'_, '_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ContextView<'_, '_, V> {}

impl<'c, 'a, V> ContextView<'c, 'a, V> {
    fn frame(&self) -> &'c Frame<V> {
        &self.run.frames[self.level]
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn grammar(&self) -> &'a Grammar<V> {
        self.run.grammar
    }

    pub fn input(&self) -> &'a InputBuffer {
        self.run.input
    }

    /// Bound rule; `None` when idle or retired.
    pub fn rule(&self) -> Option<RuleId> {
        self.frame().rule
    }

    pub fn label(&self) -> &'a str {
        self.rule().map_or("?", |id| self.run.grammar.label(id))
    }

    pub fn start_location(&self) -> InputLocation {
        let frame = self.frame();
        frame.start.unwrap_or(frame.current)
    }

    pub fn current_location(&self) -> InputLocation {
        self.frame().current
    }

    pub fn is_enforced(&self) -> bool {
        self.frame().enforced
    }

    pub fn is_below_leaf_level(&self) -> bool {
        self.frame().below_leaf_level
    }

    pub fn node(&self) -> Option<&'c NodeRef<V>> {
        self.frame().node.as_ref()
    }

    pub fn sub_nodes(&self) -> &'c [NodeRef<V>] {
        self.frame().sub_nodes()
    }

    pub fn node_value(&self) -> Option<&'c V> {
        self.frame().node_value.as_ref()
    }

    pub fn int_tag(&self) -> usize {
        self.frame().int_tag
    }

    pub fn parent(&self) -> Option<ContextView<'c, 'a, V>> {
        let level = self.level.checked_sub(1)?;
        Some(ContextView {
            run: self.run,
            level,
        })
    }

    /// The child frame, unless it is retired or was never allocated.
    pub fn sub_context(&self) -> Option<ContextView<'c, 'a, V>> {
        let level = self.level + 1;
        self.run.frames.get(level)?.rule?;
        Some(ContextView {
            run: self.run,
            level,
        })
    }

    /// `/`-separated labels from the root down to this frame.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for frame in &self.run.frames[..=self.level] {
            path.push('/');
            path.push_str(frame.rule.map_or("?", |id| self.run.grammar.label(id)));
        }
        path
    }

    /// True when this frame or an ancestor runs a lookahead rule.
    pub fn in_predicate(&self) -> bool {
        let grammar = self.run.grammar;
        self.run.frames[..=self.level]
            .iter()
            .filter_map(|frame| frame.rule)
            .any(|id| grammar.resolve(id).is_test())
    }
}

impl<V: Clone> ContextView<'_, '_, V> {
    /// Own value, else the value of the last child that has one.
    pub fn tree_value(&self) -> Option<V> {
        let frame = self.frame();
        frame.node_value.clone().or_else(|| {
            frame
                .sub_nodes()
                .iter()
                .rev()
                .find_map(|node| node.value().cloned())
        })
    }
}

/// Mutable handle on one level of a run, passed to [`Rule::matches`].
///
/// [`Rule::matches`]: super::rule::Rule::matches
pub struct MatcherContext<'r, 'a, V> {
    pub(super) run: &'r mut ParseRun<'a, V>,
    pub(super) level: usize,
}

impl<'r, 'a, V> MatcherContext<'r, 'a, V> {
    pub(super) fn frame(&self) -> &Frame<V> {
        &self.run.frames[self.level]
    }

    pub(super) fn frame_mut(&mut self) -> &mut Frame<V> {
        &mut self.run.frames[self.level]
    }

    pub fn view(&self) -> ContextView<'_, 'a, V> {
        ContextView {
            run: &*self.run,
            level: self.level,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn grammar(&self) -> &'a Grammar<V> {
        self.run.grammar
    }

    pub fn input(&self) -> &'a InputBuffer {
        self.run.input
    }

    pub fn parent(&self) -> Option<ContextView<'_, 'a, V>> {
        self.view().parent()
    }

    pub fn sub_context(&self) -> Option<ContextView<'_, 'a, V>> {
        self.view().sub_context()
    }

    pub fn rule(&self) -> Option<RuleId> {
        self.frame().rule
    }

    pub fn start_location(&self) -> InputLocation {
        self.view().start_location()
    }

    pub fn current_location(&self) -> InputLocation {
        self.frame().current
    }

    pub fn current_char(&self) -> InputChar {
        self.frame().current.current
    }

    pub fn set_current_location(&mut self, location: InputLocation) {
        self.frame_mut().current = location;
    }

    pub fn advance_input_location(&mut self) {
        let next = self.frame().current.advance(self.run.input);
        self.set_current_location(next);
    }

    pub fn is_enforced(&self) -> bool {
        self.frame().enforced
    }

    pub fn is_below_leaf_level(&self) -> bool {
        self.frame().below_leaf_level
    }

    /// Enforcement for the first element of a sequence-like rule.
    ///
    /// Inside a leaf the first element runs unenforced, so a mismatch
    /// fails the whole leaf and recovery applies to the leaf as a unit.
    pub fn enforce_first(&self) -> bool {
        self.is_enforced() && !self.is_below_leaf_level()
    }

    pub fn in_predicate(&self) -> bool {
        self.view().in_predicate()
    }

    pub fn parse_errors(&self) -> &ParseErrors<V> {
        &self.run.errors
    }

    pub fn path(&self) -> String {
        self.view().path()
    }

    pub fn node(&self) -> Option<&NodeRef<V>> {
        self.frame().node.as_ref()
    }

    pub fn node_value(&self) -> Option<&V> {
        self.frame().node_value.as_ref()
    }

    pub fn set_node_value(&mut self, value: V) {
        self.frame_mut().node_value = Some(value);
    }

    /// Most recent node built anywhere in this run.
    pub fn last_node(&self) -> Option<&NodeRef<V>> {
        self.run.last_node.as_ref()
    }

    pub fn sub_nodes(&self) -> &[NodeRef<V>] {
        self.frame().sub_nodes()
    }

    pub fn node_by_label(&self, prefix: &str) -> Option<&NodeRef<V>> {
        find_node_by_label(self.sub_nodes(), prefix)
    }

    pub fn node_by_path(&self, path: &str) -> Option<&NodeRef<V>> {
        find_node_by_path(self.sub_nodes(), path)
    }

    pub fn node_text(&self, node: &Node<V>) -> &'a str {
        node.text(self.run.input)
    }

    pub fn node_char(&self, node: &Node<V>) -> InputChar {
        node.first_char(self.run.input)
    }

    /// Input consumed so far by this invocation.
    pub fn matched_text(&self) -> &'a str {
        let start = self.start_location().index;
        self.run.input.extract(start, self.current_location().index)
    }

    pub fn int_tag(&self) -> usize {
        self.frame().int_tag
    }

    pub fn set_int_tag(&mut self, tag: usize) {
        self.frame_mut().int_tag = tag;
    }

    /// Record an error for this invocation at the current location.
    ///
    /// It reaches the run's error list when the invocation returns. A
    /// later call replaces an earlier one.
    pub fn add_error(&mut self, message: impl Into<String>) {
        let start = self.current_location();
        self.frame_mut().error = Some(PendingError {
            start,
            message: message.into(),
        });
    }

    pub fn add_unexpected_input_error(&mut self, illegal: InputChar, expected: &str) {
        self.add_error(format!("Invalid input {illegal}, expected {expected}"));
    }

    /// Attach `node` to the parent frame, or to this one at the root.
    pub(crate) fn add_to_nearest(&mut self, node: NodeRef<V>) {
        let level = self.level.saturating_sub(1);
        self.run.frames[level].add_child(node);
    }
}

impl<'r, 'a, V: Clone> MatcherContext<'r, 'a, V> {
    pub fn tree_value(&self) -> Option<V> {
        self.view().tree_value()
    }

    /// Build the node for this invocation.
    ///
    /// Does nothing below leaf level. Nodes of lookahead rules are kept on
    /// the frame only; all others are attached to the parent (or kept as
    /// the root result) and become the run's last node.
    pub fn create_node(&mut self) {
        let frame = self.frame();
        if frame.below_leaf_level {
            return;
        }
        let Some(id) = frame.rule else {
            return;
        };
        let grammar = self.run.grammar;
        let node = Rc::new(Node::new(
            grammar.label(id),
            frame.sub_nodes().to_vec(),
            self.start_location(),
            frame.current,
            self.tree_value(),
        ));

        self.frame_mut().node = Some(Rc::clone(&node));
        if grammar.resolve(id).is_test() {
            return;
        }
        if let Some(parent) = self.level.checked_sub(1) {
            self.run.frames[parent].add_child(Rc::clone(&node));
        }
        self.run.last_node = Some(node);
    }

    /// Run `rule` one level below this context.
    ///
    /// Enforced invocations that fail are recovered and reported as
    /// matched. On success this context's cursor moves to where the rule
    /// stopped. Actions run directly on this context instead.
    pub fn run_matcher(&mut self, rule: RuleId, enforced: bool) -> Result<bool, ParserError> {
        let grammar = self.run.grammar;
        if grammar.resolve(rule).is_action() {
            return self.run_action(rule);
        }

        let level = self.bind(rule, enforced)?;
        let result = MatcherContext {
            run: &mut *self.run,
            level,
        }
        .run_bound(rule, enforced);

        match result {
            Ok((matched, end)) => {
                if matched {
                    self.set_current_location(end);
                }
                // retire
                self.run.frames[level].rule = None;
                Ok(matched)
            }
            Err(ParserError::Fault(source)) => {
                let location = self.run.frames[level].current;
                Err(ParserError::Rule {
                    kind: "rule",
                    path: self.path(),
                    position: self.run.input.position(location.index),
                    source,
                })
            }
            Err(e) => Err(e),
        }
    }

    fn run_action(&mut self, rule: RuleId) -> Result<bool, ParserError> {
        let grammar = self.run.grammar;
        let location = self.current_location();
        self.run
            .tracer
            .trace_action(self.level, grammar.label(rule), location);

        match grammar.rule(rule).matches(self) {
            Err(ParserError::Fault(source)) => Err(ParserError::Rule {
                kind: "action",
                path: format!("{}/{}", self.path(), grammar.label(rule)),
                position: self.run.input.position(self.current_location().index),
                source,
            }),
            other => other,
        }
    }

    /// Bind `rule` to the frame that will run it and return its level.
    ///
    /// The first invocation on a fresh root binds the root frame itself.
    /// Otherwise the child frame is allocated on first use and reset on
    /// every later one.
    fn bind(&mut self, rule: RuleId, enforced: bool) -> Result<usize, ParserError> {
        let grammar = self.run.grammar;
        if self.frame().start.is_none() {
            let start = InputLocation::start(self.run.input);
            let frame = self.frame_mut();
            frame.reuse(rule, enforced, start, false);
            return Ok(self.level);
        }

        let level = self.level + 1;
        if level >= self.run.limits.recursion_limit as usize {
            return Err(ParserError::RecursionLimitExceeded(
                self.run.limits.recursion_limit,
            ));
        }

        let current = self.current_location();
        if self.run.frames.len() == level {
            self.run.frames.push(Frame::new(current));
        }
        let below_leaf_level = self.frame().below_leaf_level || grammar.is_leaf(rule);
        self.run.frames[level].reuse(rule, enforced, current, below_leaf_level);
        Ok(level)
    }

    /// Execute the rule bound to this frame, recover, flush the pending
    /// error. Returns the outcome and where this frame's cursor ended.
    fn run_bound(
        &mut self,
        rule: RuleId,
        enforced: bool,
    ) -> Result<(bool, InputLocation), ParserError> {
        let grammar = self.run.grammar;
        let label = grammar.label(rule);
        let start = self.current_location();
        self.run.tracer.trace_enter(self.level, label, start);

        let mut matched = grammar.rule(rule).matches(self)?;
        if !matched && enforced && !grammar.resolve(rule).is_test() {
            self.recover(rule)?;
            matched = true;
        }

        if let Some(pending) = self.frame_mut().error.take() {
            let error = ParseError::new(
                pending.start,
                self.current_location(),
                self.node().cloned(),
                pending.message,
            );
            self.run.add_parse_error(self.level, error);
        }

        let end = self.current_location();
        self.run.tracer.trace_exit(self.level, label, matched, end);
        Ok((matched, end))
    }
}
