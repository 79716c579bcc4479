#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::agent::AgentId;
use crate::rng::{derive_seed, SplitMix64};

/// Per-frame data handed to every pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    /// Host-chosen seed; behaviors draw randomness only through [`TickContext::rng_for_agent`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self {
            tick,
            dt_seconds,
            seed: 0,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            ..self
        }
    }

    /// A generator private to `agent` and `stream` for this tick.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        SplitMix64::new(derive_seed(self.seed, self.tick, agent.stable_id(), stream))
    }
}
