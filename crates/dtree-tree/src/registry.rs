use std::collections::BTreeMap;
use std::fmt;

use dtree_core::{Binding, TickContext, WorldMut, WorldView};

use crate::error::BehaviorError;
use crate::node::Target;

/// Opaque reference from a decision node to a named condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConditionKey(pub &'static str);

/// Opaque reference from an action node to a named behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BehaviorKey(pub &'static str);

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for BehaviorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A pure query over the world. It only ever sees `&W`.
pub type ConditionFn<W> = dyn Fn(&TickContext, Binding<<W as WorldView>::Agent>, &W, Option<&Target>) -> bool
    + Send
    + Sync;

/// A command with one side effect on the world.
///
/// `Err` is reserved for soft failures (an unresolvable target); the executor turns it into a
/// skipped effect instead of failing the pass.
pub type BehaviorFn<W> = dyn Fn(
        &TickContext,
        Binding<<W as WorldView>::Agent>,
        &mut W,
        Option<&Target>,
    ) -> Result<(), BehaviorError>
    + Send
    + Sync;

pub struct ConditionRegistry<W>
where
    W: WorldView + 'static,
{
    entries: BTreeMap<ConditionKey, Box<ConditionFn<W>>>,
}

impl<W> Default for ConditionRegistry<W>
where
    W: WorldView + 'static,
{
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<W> ConditionRegistry<W>
where
    W: WorldView + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `cond` under `key`, replacing any previous entry.
    pub fn register<F>(&mut self, key: ConditionKey, cond: F)
    where
        F: Fn(&TickContext, Binding<W::Agent>, &W, Option<&Target>) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(key, Box::new(cond));
    }

    pub fn with<F>(mut self, key: ConditionKey, cond: F) -> Self
    where
        F: Fn(&TickContext, Binding<W::Agent>, &W, Option<&Target>) -> bool + Send + Sync + 'static,
    {
        self.register(key, cond);
        self
    }

    pub fn get(&self, key: ConditionKey) -> Option<&ConditionFn<W>> {
        self.entries.get(&key).map(|b| &**b)
    }

    pub fn contains(&self, key: ConditionKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ConditionKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct BehaviorRegistry<W>
where
    W: WorldMut + 'static,
{
    entries: BTreeMap<BehaviorKey, Box<BehaviorFn<W>>>,
}

impl<W> Default for BehaviorRegistry<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<W> BehaviorRegistry<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `behavior` under `key`, replacing any previous entry.
    pub fn register<F>(&mut self, key: BehaviorKey, behavior: F)
    where
        F: Fn(&TickContext, Binding<W::Agent>, &mut W, Option<&Target>) -> Result<(), BehaviorError>
            + Send
            + Sync
            + 'static,
    {
        self.entries.insert(key, Box::new(behavior));
    }

    pub fn with<F>(mut self, key: BehaviorKey, behavior: F) -> Self
    where
        F: Fn(&TickContext, Binding<W::Agent>, &mut W, Option<&Target>) -> Result<(), BehaviorError>
            + Send
            + Sync
            + 'static,
    {
        self.register(key, behavior);
        self
    }

    pub fn get(&self, key: BehaviorKey) -> Option<&BehaviorFn<W>> {
        self.entries.get(&key).map(|b| &**b)
    }

    pub fn contains(&self, key: BehaviorKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = BehaviorKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both lookup tables a tree resolves its keys against.
///
/// Built once at startup and shared (usually behind an `Arc`) by every tree in the process.
pub struct Registries<W>
where
    W: WorldMut + 'static,
{
    pub conditions: ConditionRegistry<W>,
    pub behaviors: BehaviorRegistry<W>,
}

impl<W> Default for Registries<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self {
            conditions: ConditionRegistry::new(),
            behaviors: BehaviorRegistry::new(),
        }
    }
}

impl<W> Registries<W>
where
    W: WorldMut + 'static,
{
    pub fn new(conditions: ConditionRegistry<W>, behaviors: BehaviorRegistry<W>) -> Self {
        Self {
            conditions,
            behaviors,
        }
    }
}
