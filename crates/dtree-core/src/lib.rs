//! Deterministic, engine-agnostic primitives shared by the decision tree runtime.
//!
//! Nothing here knows about trees. The crate only fixes how agents are identified, how a tree
//! is bound to "its" agent and opponent, and which world seams the runtime reads and writes.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod rng;
pub mod tick;
pub mod world;

pub use agent::{AgentId, Binding};
pub use rng::{derive_seed, DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use world::{Liveness, WorldMut, WorldView};
