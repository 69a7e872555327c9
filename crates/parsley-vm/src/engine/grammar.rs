//! Rule arena.
//!
//! A `Grammar` owns every rule of a (possibly cyclic) rule graph. Recursion
//! goes through forward declarations: `declare` reserves an id, `define`
//! later installs a transparent `Proxy` pointing at the real rule.

use indexmap::IndexMap;

use super::rule::{Rule, RuleId};
use crate::matchers::Proxy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("rule '{0}' was declared but never defined")]
    Undefined(String),

    #[error("rule '{0}' is already defined")]
    AlreadyDefined(String),

    #[error("duplicate rule name '{0}'")]
    DuplicateName(String),

    #[error("rule {0} does not exist")]
    UnknownRule(RuleId),

    #[error("rule '{0}' wraps itself")]
    ProxyCycle(String),

    #[error("{0} needs at least one element")]
    EmptyComposite(&'static str),

    #[error("invalid char range {0:?}..{1:?}")]
    InvalidRange(char, char),
}

/// Immutable rule graph with a designated root.
#[derive(Debug)]
pub struct Grammar<V> {
    rules: Vec<Box<dyn Rule<V>>>,
    names: IndexMap<String, RuleId>,
    root: RuleId,
}

impl<V> Grammar<V> {
    pub fn builder() -> GrammarBuilder<V> {
        GrammarBuilder::new()
    }

    pub fn root(&self) -> RuleId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn rule(&self, id: RuleId) -> &dyn Rule<V> {
        self.rules[id.index()].as_ref()
    }

    /// The rule behind any chain of transparent wrappers.
    pub fn resolve(&self, mut id: RuleId) -> &dyn Rule<V> {
        while let Some(target) = self.rule(id).target() {
            id = target;
        }
        self.rule(id)
    }

    pub fn label(&self, id: RuleId) -> &str {
        self.rule(id).label()
    }

    /// Leaf if the rule, or anything it transparently wraps, is a leaf.
    pub fn is_leaf(&self, mut id: RuleId) -> bool {
        loop {
            let rule = self.rule(id);
            if rule.is_leaf() {
                return true;
            }
            match rule.target() {
                Some(target) => id = target,
                None => return false,
            }
        }
    }

    /// Look up a named rule.
    pub fn find(&self, name: &str) -> Option<RuleId> {
        self.names.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = (&str, RuleId)> {
        self.names.iter().map(|(name, &id)| (name.as_str(), id))
    }
}

/// Incremental grammar construction.
///
/// Combinators for the standard matchers live in [`crate::matchers`].
#[derive(Debug)]
pub struct GrammarBuilder<V> {
    slots: Vec<Slot<V>>,
    names: IndexMap<String, RuleId>,
}

#[derive(Debug)]
enum Slot<V> {
    Declared(String),
    Defined(Box<dyn Rule<V>>),
}

impl<V> GrammarBuilder<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            names: IndexMap::new(),
        }
    }

    /// Add an anonymous rule.
    pub fn add(&mut self, rule: impl Rule<V> + 'static) -> RuleId {
        let id = self.next_id();
        self.slots.push(Slot::Defined(Box::new(rule)));
        id
    }

    /// Reserve a named rule whose body is given later with `define`.
    pub fn declare(&mut self, name: &str) -> Result<RuleId, GrammarError> {
        let id = self.next_id();
        self.register(name, id)?;
        self.slots.push(Slot::Declared(name.to_owned()));
        Ok(id)
    }

    /// Point a declared rule at its body.
    pub fn define(&mut self, id: RuleId, body: RuleId) -> Result<(), GrammarError> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or(GrammarError::UnknownRule(id))?;
        let name = match slot {
            Slot::Declared(name) => std::mem::take(name),
            Slot::Defined(rule) => return Err(GrammarError::AlreadyDefined(rule.label().to_owned())),
        };
        *slot = Slot::Defined(Box::new(Proxy::new(name, body)));
        Ok(())
    }

    /// Add a named, transparent wrapper around `body`.
    pub fn rule(&mut self, name: &str, body: RuleId) -> Result<RuleId, GrammarError> {
        self.named(name, Proxy::new(name, body))
    }

    /// Like [`rule`](Self::rule), but the wrapper is a leaf: no tree nodes
    /// are built below it.
    pub fn leaf_rule(&mut self, name: &str, body: RuleId) -> Result<RuleId, GrammarError> {
        self.named(name, Proxy::new(name, body).leaf())
    }

    fn named(&mut self, name: &str, proxy: Proxy) -> Result<RuleId, GrammarError> {
        let id = self.next_id();
        self.register(name, id)?;
        self.slots.push(Slot::Defined(Box::new(proxy)));
        Ok(id)
    }

    pub fn build(self, root: RuleId) -> Result<Grammar<V>, GrammarError> {
        if root.index() >= self.slots.len() {
            return Err(GrammarError::UnknownRule(root));
        }

        let mut rules = Vec::with_capacity(self.slots.len());
        for slot in self.slots {
            match slot {
                Slot::Declared(name) => return Err(GrammarError::Undefined(name)),
                Slot::Defined(rule) => rules.push(rule),
            }
        }

        let grammar = Grammar {
            rules,
            names: self.names,
            root,
        };
        grammar.check_targets()?;
        Ok(grammar)
    }

    fn next_id(&self) -> RuleId {
        RuleId(self.slots.len() as u32)
    }

    fn register(&mut self, name: &str, id: RuleId) -> Result<(), GrammarError> {
        if self.names.contains_key(name) {
            return Err(GrammarError::DuplicateName(name.to_owned()));
        }
        self.names.insert(name.to_owned(), id);
        Ok(())
    }
}

impl<V> Default for GrammarBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Grammar<V> {
    /// Every `target` chain must exist and end at a non-wrapper.
    fn check_targets(&self) -> Result<(), GrammarError> {
        for (index, rule) in self.rules.iter().enumerate() {
            let mut id = RuleId(index as u32);
            let mut current: &dyn Rule<V> = rule.as_ref();
            let mut steps = 0;
            while let Some(target) = current.target() {
                if target.index() >= self.rules.len() {
                    return Err(GrammarError::UnknownRule(target));
                }
                steps += 1;
                if steps > self.rules.len() {
                    return Err(GrammarError::ProxyCycle(self.label(id).to_owned()));
                }
                id = target;
                current = self.rule(id);
            }
        }
        Ok(())
    }
}
