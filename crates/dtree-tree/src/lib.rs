//! Binary decision tree runtime built on `dtree-core`.
//!
//! A tree is an arena of [`Node`]s. Decision nodes name a condition and route to one of two
//! children; action nodes name a behavior and end the pass. Children are referenced by
//! [`NodeId`], so one node may hang under several parents (the graph is a DAG).
//!
//! Conditions and behaviors are not stored in the nodes. Nodes hold opaque keys that are
//! resolved through process-wide [`Registries`] on every pass.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod node;
pub mod registry;
pub mod tree;

pub use builder::TreeBuilder;
pub use error::{BehaviorError, BuildError, PassError};
pub use node::{
    ActionNode, Branch, DecisionNode, Effect, Node, NodeId, NodeKind, PassScope, Step, Target,
};
pub use registry::{
    BehaviorFn, BehaviorKey, BehaviorRegistry, ConditionFn, ConditionKey, ConditionRegistry,
    Registries,
};
pub use tree::{
    tick_trees, DecisionTree, PassReport, TickSummary, TRACE_ABORT, TRACE_ACT, TRACE_DECIDE,
    TRACE_SKIP,
};
