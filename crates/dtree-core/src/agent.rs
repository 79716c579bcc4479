use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for an agent.
///
/// Hosts tick agents in `Ord` order and logs use `stable_id`, so both must be deterministic.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

/// The agent a tree drives, plus the opponent it was paired with.
///
/// The opponent is injected once when the tree is built and never re-resolved by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binding<A> {
    pub agent: A,
    pub opponent: A,
}

impl<A: AgentId> Binding<A> {
    pub fn new(agent: A, opponent: A) -> Self {
        Self { agent, opponent }
    }

    /// The same pairing seen from the opponent's side.
    pub fn mirrored(self) -> Self {
        Self {
            agent: self.opponent,
            opponent: self.agent,
        }
    }
}
