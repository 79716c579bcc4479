use thiserror::Error;

use crate::node::{Branch, NodeId, NodeKind, Target};
use crate::registry::{BehaviorKey, ConditionKey};

/// Why a single pass aborted without running a behavior.
///
/// A failed pass is contained: the caller logs it and the next tick starts again from the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    #[error("node {node} does not exist in this tree")]
    UnknownNode { node: NodeId },

    #[error("decision node {node} has no {branch} branch")]
    MissingBranch { node: NodeId, branch: Branch },

    #[error("decision node {node} references unregistered condition `{key}`")]
    UnknownCondition { node: NodeId, key: ConditionKey },

    #[error("action node {node} references unregistered behavior `{key}`")]
    UnknownBehavior { node: NodeId, key: BehaviorKey },

    #[error("node {node} was visited twice in one pass (cycle)")]
    Cycle { node: NodeId },

    #[error("node {node} is not a {expected} node")]
    WrongNodeKind { node: NodeId, expected: NodeKind },
}

impl PassError {
    /// The node at which the pass stopped.
    pub fn node(&self) -> NodeId {
        match self {
            PassError::UnknownNode { node }
            | PassError::MissingBranch { node, .. }
            | PassError::UnknownCondition { node, .. }
            | PassError::UnknownBehavior { node, .. }
            | PassError::Cycle { node }
            | PassError::WrongNodeKind { node, .. } => *node,
        }
    }
}

/// Soft failure reported by a behavior. Never aborts a pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    #[error("target {0} is not in view")]
    UnresolvedTarget(Target),

    #[error("behavior requires a target token but none was given")]
    MissingTarget,
}

/// Structural problems found while assembling a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("node {0} was not allocated by this builder")]
    UnknownNode(NodeId),

    #[error("node {0} is an action node and cannot have children")]
    NotADecision(NodeId),

    #[error("decision node {node} has no {branch} branch")]
    MissingBranch { node: NodeId, branch: Branch },

    #[error("decision node {node} references unregistered condition `{key}`")]
    UnknownCondition { node: NodeId, key: ConditionKey },

    #[error("action node {node} references unregistered behavior `{key}`")]
    UnknownBehavior { node: NodeId, key: BehaviorKey },

    #[error("node {node} can reach itself")]
    Cycle { node: NodeId },

    #[error("more than {limit} nodes were allocated")]
    TooManyNodes { limit: usize },
}
