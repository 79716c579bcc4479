#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use dtree_core::{Binding, Liveness, TickContext, WorldMut, WorldView};
use dtree_tree::{
    BehaviorError, BehaviorKey, BehaviorRegistry, ConditionKey, ConditionRegistry, Registries,
    Target,
};

pub const FLAG: ConditionKey = ConditionKey("flag");
pub const RECORD: BehaviorKey = BehaviorKey("record");
pub const REACH: BehaviorKey = BehaviorKey("reach");

/// A world made of named booleans plus a log of every behavior that ran.
#[derive(Debug, Default)]
pub struct FlagWorld {
    pub flags: BTreeMap<String, bool>,
    pub dead: BTreeSet<u64>,
    pub ran: Vec<(u64, &'static str, Option<Target>)>,
}

impl FlagWorld {
    pub fn with_flags(flags: &[(&str, bool)]) -> Self {
        Self {
            flags: flags.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        }
    }

    pub fn set(&mut self, flag: &str, value: bool) {
        self.flags.insert(flag.to_string(), value);
    }

    fn flag(&self, target: Option<&Target>) -> bool {
        target
            .and_then(Target::as_object)
            .and_then(|name| self.flags.get(name).copied())
            .unwrap_or(false)
    }
}

impl WorldView for FlagWorld {
    type Agent = u64;
}

impl WorldMut for FlagWorld {}

impl Liveness for FlagWorld {
    fn is_alive(&self, agent: u64) -> bool {
        !self.dead.contains(&agent)
    }
}

fn flag(_ctx: &TickContext, _b: Binding<u64>, world: &FlagWorld, target: Option<&Target>) -> bool {
    world.flag(target)
}

/// Registries with one condition and two behaviors:
/// - `flag(name)` reads `world.flags[name]`
/// - `record(label)` appends to `world.ran`
/// - `reach(name)` records only when `flag(name)` holds, otherwise reports an unresolved target
pub fn registries() -> Arc<Registries<FlagWorld>> {
    let conditions = ConditionRegistry::new().with(FLAG, flag);
    let behaviors = BehaviorRegistry::new()
        .with(RECORD, |_ctx: &TickContext, b: Binding<u64>, world: &mut FlagWorld, target: Option<&Target>| {
            world.ran.push((b.agent, "record", target.cloned()));
            Ok(())
        })
        .with(REACH, |_ctx: &TickContext, b: Binding<u64>, world: &mut FlagWorld, target: Option<&Target>| {
            let target = target.ok_or(BehaviorError::MissingTarget)?;
            if !world.flag(Some(target)) {
                return Err(BehaviorError::UnresolvedTarget(target.clone()));
            }
            world.ran.push((b.agent, "reach", Some(target.clone())));
            Ok(())
        });
    Arc::new(Registries::new(conditions, behaviors))
}

pub fn obj(name: &'static str) -> Option<Target> {
    Some(Target::object(name))
}

pub fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, 0.1)
}
