#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use dtree_core::{DeterministicRng, Liveness, SplitMix64, TickContext, WorldMut, WorldView};
use dtree_duel::behaviors::WANDER_STREAM;
use dtree_duel::{ArenaMut, ArenaView, Percept};

pub const RED: u64 = 1;
pub const BLUE: u64 = 2;

/// What an agent can see and move toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Agent(u64),
    Item(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u64, Seen),
    /// Agent and the first draw of its wander stream.
    Wander(u64, u64),
    Attack(u64, u64),
    Flee(u64, u64),
}

#[derive(Debug, Clone)]
pub struct Duelist {
    pub alive: bool,
    pub hit_points: i32,
    pub powered: bool,
    pub sees_items: BTreeSet<String>,
    pub sees_agents: BTreeSet<u64>,
    pub in_range: BTreeSet<u64>,
}

impl Default for Duelist {
    fn default() -> Self {
        Self {
            alive: true,
            hit_points: 100,
            powered: false,
            sees_items: BTreeSet::new(),
            sees_agents: BTreeSet::new(),
            in_range: BTreeSet::new(),
        }
    }
}

/// Scripted state plus a log of every command the trees issued.
///
/// Items listed in `vanishing` still answer visibility checks but can no longer be resolved,
/// which is what a host sees when an object leaves view between the decision and the action.
#[derive(Debug, Default)]
pub struct ScriptedArena {
    pub agents: BTreeMap<u64, Duelist>,
    pub vanishing: BTreeSet<String>,
    pub commands: Vec<Command>,
}

impl ScriptedArena {
    pub fn duel() -> Self {
        let mut arena = Self::default();
        arena.agents.insert(RED, Duelist::default());
        arena.agents.insert(BLUE, Duelist::default());
        arena
    }

    pub fn agent(&mut self, id: u64) -> &mut Duelist {
        self.agents.entry(id).or_default()
    }

    fn get(&self, id: u64) -> Option<&Duelist> {
        self.agents.get(&id)
    }
}

impl WorldView for ScriptedArena {
    type Agent = u64;
}

impl WorldMut for ScriptedArena {}

impl Liveness for ScriptedArena {
    fn is_alive(&self, agent: u64) -> bool {
        self.get(agent).is_some_and(|d| d.alive)
    }
}

impl ArenaView for ScriptedArena {
    type Object = Seen;

    fn has_power_up(&self, agent: u64) -> bool {
        self.get(agent).is_some_and(|d| d.powered)
    }

    fn hit_points(&self, agent: u64) -> i32 {
        self.get(agent).map_or(0, |d| d.hit_points)
    }

    fn is_in_attack_range(&self, agent: u64, target: u64) -> bool {
        self.get(agent).is_some_and(|d| d.in_range.contains(&target))
    }

    fn object_in_view(&self, agent: u64, percept: Percept<'_, u64>) -> Option<Seen> {
        if !self.is_object_in_view(agent, percept) {
            return None;
        }
        match percept {
            Percept::Agent(id) => Some(Seen::Agent(id)),
            Percept::Category(name) if self.vanishing.contains(name) => None,
            Percept::Category(name) => Some(Seen::Item(name.to_string())),
        }
    }

    fn is_object_in_view(&self, agent: u64, percept: Percept<'_, u64>) -> bool {
        let Some(d) = self.get(agent) else {
            return false;
        };
        match percept {
            Percept::Agent(id) => d.sees_agents.contains(&id),
            Percept::Category(name) => d.sees_items.contains(name),
        }
    }
}

impl ArenaMut for ScriptedArena {
    fn move_to(&mut self, agent: u64, object: Seen) {
        self.commands.push(Command::MoveTo(agent, object));
    }

    fn random_wander(&mut self, agent: u64, rng: &mut SplitMix64) {
        self.commands.push(Command::Wander(agent, rng.next_u64()));
    }

    fn attack(&mut self, agent: u64, target: u64) {
        self.commands.push(Command::Attack(agent, target));
    }

    fn flee(&mut self, agent: u64, from: u64) {
        self.commands.push(Command::Flee(agent, from));
    }
}

pub fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, 1.0 / 60.0)
}

/// The wander command `agent` issues on `ctx`.
pub fn wandered(agent: u64, ctx: &TickContext) -> Command {
    Command::Wander(agent, ctx.rng_for_agent(agent, WANDER_STREAM).next_u64())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
