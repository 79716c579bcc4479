use dtree_core::{Binding, Liveness, SplitMix64, WorldMut};
use dtree_tree::Target;

/// Something an agent can look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percept<'a, A> {
    /// A specific agent, by id.
    Agent(A),
    /// Any object of a category, e.g. "Health Kit".
    Category(&'a str),
}

/// Resolves a target token against the tree's binding.
pub fn percept_for<A: Copy>(binding: Binding<A>, target: &Target) -> Percept<'_, A> {
    match target {
        Target::Opponent => Percept::Agent(binding.opponent),
        Target::Object(name) => Percept::Category(name),
    }
}

/// Status queries the duel conditions read.
///
/// Every method is a snapshot read. Implementations must not mutate anything observable.
pub trait ArenaView: Liveness {
    /// A perceived thing that can be moved toward.
    type Object;

    fn has_power_up(&self, agent: Self::Agent) -> bool;

    fn hit_points(&self, agent: Self::Agent) -> i32;

    fn is_in_attack_range(&self, agent: Self::Agent, target: Self::Agent) -> bool;

    /// The object matching `percept` if `agent` can currently see one.
    fn object_in_view(&self, agent: Self::Agent, percept: Percept<'_, Self::Agent>) -> Option<Self::Object>;

    fn is_object_in_view(&self, agent: Self::Agent, percept: Percept<'_, Self::Agent>) -> bool {
        self.object_in_view(agent, percept).is_some()
    }
}

/// Commands the duel behaviors issue.
pub trait ArenaMut: ArenaView + WorldMut {
    fn move_to(&mut self, agent: Self::Agent, object: Self::Object);

    /// `rng` is private to this agent and tick; draw every random choice from it so replays match.
    fn random_wander(&mut self, agent: Self::Agent, rng: &mut SplitMix64);

    /// Does not check range; the tree only routes here after an in-range decision.
    fn attack(&mut self, agent: Self::Agent, target: Self::Agent);

    fn flee(&mut self, agent: Self::Agent, from: Self::Agent);
}
