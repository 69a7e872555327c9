//! Per-depth context state.
//!
//! One `Frame` exists per level of the active rule chain. Frames are never
//! deallocated during a run: when a rule returns, its frame is retired
//! (`rule = None`) and the next sibling invocation at the same level
//! resets and reuses it.

use parsley_core::InputLocation;

use super::node::NodeRef;
use super::rule::RuleId;

/// Error message waiting to be flushed into the run's error list.
#[derive(Clone, Debug)]
pub(crate) struct PendingError {
    pub start: InputLocation,
    pub message: String,
}

pub(crate) struct Frame<V> {
    /// Rule bound to this level; `None` once retired.
    pub rule: Option<RuleId>,
    pub enforced: bool,
    /// `None` only on the root frame before bootstrap.
    pub start: Option<InputLocation>,
    pub current: InputLocation,
    pub node: Option<NodeRef<V>>,
    /// Completed child nodes; `None` until the first one arrives.
    pub sub_nodes: Option<Vec<NodeRef<V>>>,
    pub error: Option<PendingError>,
    pub node_value: Option<V>,
    pub int_tag: usize,
    pub below_leaf_level: bool,
}

impl<V> Frame<V> {
    pub fn new(current: InputLocation) -> Self {
        Self {
            rule: None,
            enforced: false,
            start: None,
            current,
            node: None,
            sub_nodes: None,
            error: None,
            node_value: None,
            int_tag: 0,
            below_leaf_level: false,
        }
    }

    /// Rebind for a new invocation starting at `location`.
    ///
    /// Every field a previous invocation may have written is reset, except
    /// `int_tag`, which belongs to the rule and is always set before use.
    pub fn reuse(&mut self, rule: RuleId, enforced: bool, location: InputLocation, below_leaf_level: bool) {
        self.rule = Some(rule);
        self.enforced = enforced;
        self.start = Some(location);
        self.current = location;
        self.node = None;
        self.sub_nodes = None;
        self.error = None;
        self.node_value = None;
        self.below_leaf_level = below_leaf_level;
    }

    pub fn add_child(&mut self, node: NodeRef<V>) {
        self.sub_nodes.get_or_insert_with(Vec::new).push(node);
    }

    pub fn sub_nodes(&self) -> &[NodeRef<V>] {
        self.sub_nodes.as_deref().unwrap_or(&[])
    }
}
