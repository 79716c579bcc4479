use crate::AgentId;

/// Read-only world access.
///
/// The core crate does not prescribe which queries a world must expose; scenario crates define
/// extension traits (see the duel crate's `ArenaView`).
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}

/// Whether an agent should be ticked at all.
pub trait Liveness: WorldView {
    fn is_alive(&self, agent: Self::Agent) -> bool;
}
