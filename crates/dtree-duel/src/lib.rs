//! Two-agent duel behavior expressed as a binary decision tree.
//!
//! The crate supplies the pieces a host needs around the generic runtime in `dtree-tree`:
//! - [`ArenaView`] / [`ArenaMut`]: the capability surface a host world implements
//! - [`conditions`] and [`behaviors`]: the named entries of the process-wide registries
//! - [`topology`]: the reference duel wiring, built once per agent
//! - [`DuelConfig`]: thresholds and pickup category names

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod arena;
pub mod behaviors;
pub mod conditions;
pub mod config;
pub mod topology;

pub use arena::{percept_for, ArenaMut, ArenaView, Percept};
pub use config::{Advantage, ConfigError, DuelConfig};
pub use topology::{build_duel_pair, build_duel_tree, duel_registries};
