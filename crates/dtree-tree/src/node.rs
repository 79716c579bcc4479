use std::borrow::Cow;
use std::fmt;

use dtree_core::{Binding, TickContext, WorldMut};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BehaviorError, PassError};
use crate::registry::{BehaviorKey, ConditionKey, Registries};

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Id for arena slot `index`. `u32::MAX` is never allocated, so the largest valid index is
    /// `u32::MAX - 1`.
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&raw| raw != u32::MAX)
            .map(NodeId)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a condition or behavior is about.
///
/// `Opponent` resolves through the tree's [`Binding`]; agent identity never travels as a string.
/// `Object` names a category of perceivable thing ("Health Kit", "Power Up").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Target {
    Opponent,
    Object(Cow<'static, str>),
}

impl Target {
    pub fn object(name: impl Into<Cow<'static, str>>) -> Self {
        Target::Object(name.into())
    }

    pub fn as_object(&self) -> Option<&str> {
        match self {
            Target::Object(name) => Some(name),
            Target::Opponent => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Opponent => f.write_str("opponent"),
            Target::Object(name) => write!(f, "\"{name}\""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Branch {
    True,
    False,
}

impl Branch {
    pub fn from_outcome(outcome: bool) -> Self {
        if outcome {
            Branch::True
        } else {
            Branch::False
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::True => f.write_str("true"),
            Branch::False => f.write_str("false"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Decision,
    Action,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Decision => f.write_str("decision"),
            NodeKind::Action => f.write_str("action"),
        }
    }
}

/// Result of running an action node's behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Performed,
    /// The behavior could not act this tick (e.g. its target left view). Nothing changed.
    Skipped(BehaviorError),
}

impl Effect {
    pub fn is_performed(&self) -> bool {
        matches!(self, Effect::Performed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    pub(crate) condition: ConditionKey,
    pub(crate) target: Option<Target>,
    pub(crate) on_true: Option<NodeId>,
    pub(crate) on_false: Option<NodeId>,
    pub(crate) label: Option<Cow<'static, str>>,
}

impl DecisionNode {
    pub fn condition(&self) -> ConditionKey {
        self.condition
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn child(&self, branch: Branch) -> Option<NodeId> {
        match branch {
            Branch::True => self.on_true,
            Branch::False => self.on_false,
        }
    }

    pub fn on_true(&self) -> Option<NodeId> {
        self.on_true
    }

    pub fn on_false(&self) -> Option<NodeId> {
        self.on_false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNode {
    pub(crate) behavior: BehaviorKey,
    pub(crate) target: Option<Target>,
    pub(crate) label: Option<Cow<'static, str>>,
}

impl ActionNode {
    pub fn behavior(&self) -> BehaviorKey {
        self.behavior
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Decision(DecisionNode),
    Action(ActionNode),
}

/// Everything a node needs from the pass that is visiting it.
pub struct PassScope<'a, W>
where
    W: WorldMut + 'static,
{
    pub ctx: &'a TickContext,
    pub binding: Binding<W::Agent>,
    pub registries: &'a Registries<W>,
}

/// The branch a decision took and the node it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub branch: Branch,
    pub next: NodeId,
}

impl Node {
    pub fn is_action(&self) -> bool {
        matches!(self, Node::Action(_))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Decision(_) => NodeKind::Decision,
            Node::Action(_) => NodeKind::Action,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Decision(d) => d.label.as_deref(),
            Node::Action(a) => a.label.as_deref(),
        }
    }

    pub fn target(&self) -> Option<&Target> {
        match self {
            Node::Decision(d) => d.target(),
            Node::Action(a) => a.target(),
        }
    }

    /// Runs the condition and picks a child. Reads the world only.
    ///
    /// Calling this on an action node is a contract violation and returns
    /// [`PassError::WrongNodeKind`].
    pub fn evaluate<W>(&self, id: NodeId, scope: &PassScope<'_, W>, world: &W) -> Result<Step, PassError>
    where
        W: WorldMut + 'static,
    {
        let Node::Decision(decision) = self else {
            return Err(PassError::WrongNodeKind {
                node: id,
                expected: NodeKind::Decision,
            });
        };

        let cond = scope
            .registries
            .conditions
            .get(decision.condition)
            .ok_or(PassError::UnknownCondition {
                node: id,
                key: decision.condition,
            })?;

        let branch = Branch::from_outcome(cond(
            scope.ctx,
            scope.binding,
            world,
            decision.target.as_ref(),
        ));
        let next = decision
            .child(branch)
            .ok_or(PassError::MissingBranch { node: id, branch })?;

        Ok(Step { branch, next })
    }

    /// Runs the behavior. The only place a pass touches the world mutably.
    ///
    /// Calling this on a decision node is a contract violation and returns
    /// [`PassError::WrongNodeKind`].
    pub fn execute<W>(&self, id: NodeId, scope: &PassScope<'_, W>, world: &mut W) -> Result<Effect, PassError>
    where
        W: WorldMut + 'static,
    {
        let Node::Action(action) = self else {
            return Err(PassError::WrongNodeKind {
                node: id,
                expected: NodeKind::Action,
            });
        };

        let behavior = scope
            .registries
            .behaviors
            .get(action.behavior)
            .ok_or(PassError::UnknownBehavior {
                node: id,
                key: action.behavior,
            })?;

        match behavior(scope.ctx, scope.binding, world, action.target.as_ref()) {
            Ok(()) => Ok(Effect::Performed),
            Err(soft) => Ok(Effect::Skipped(soft)),
        }
    }
}
