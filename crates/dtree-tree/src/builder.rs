use std::borrow::Cow;
use std::sync::Arc;

use dtree_core::{Binding, WorldMut};

use crate::error::BuildError;
use crate::node::{ActionNode, Branch, DecisionNode, Node, NodeId, Target};
use crate::registry::{BehaviorKey, ConditionKey, Registries};
use crate::tree::DecisionTree;

/// Allocates nodes, wires children, then freezes the result into a [`DecisionTree`].
///
/// Wiring happens after allocation, so the same [`NodeId`] can be handed to as many parents as
/// needed. Once built, the tree is immutable.
///
/// A builder holds at most [`TreeBuilder::MAX_NODES`] nodes. Allocations past that return an id
/// that no wiring call accepts, and [`TreeBuilder::build`] fails with
/// [`BuildError::TooManyNodes`].
pub struct TreeBuilder<W>
where
    W: WorldMut + 'static,
{
    name: Cow<'static, str>,
    nodes: Vec<Node>,
    registries: Arc<Registries<W>>,
    overflowed: bool,
}

impl<W> TreeBuilder<W>
where
    W: WorldMut + 'static,
{
    pub const MAX_NODES: usize = u32::MAX as usize;

    pub fn new(name: impl Into<Cow<'static, str>>, registries: Arc<Registries<W>>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            registries,
            overflowed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn decision(&mut self, condition: ConditionKey, target: Option<Target>) -> NodeId {
        self.push(Node::Decision(DecisionNode {
            condition,
            target,
            on_true: None,
            on_false: None,
            label: None,
        }))
    }

    pub fn action(&mut self, behavior: BehaviorKey, target: Option<Target>) -> NodeId {
        self.push(Node::Action(ActionNode {
            behavior,
            target,
            label: None,
        }))
    }

    /// [`TreeBuilder::decision`] with a label attached at allocation.
    pub fn labeled_decision(
        &mut self,
        condition: ConditionKey,
        target: Option<Target>,
        label: impl Into<Cow<'static, str>>,
    ) -> NodeId {
        self.push(Node::Decision(DecisionNode {
            condition,
            target,
            on_true: None,
            on_false: None,
            label: Some(label.into()),
        }))
    }

    /// [`TreeBuilder::action`] with a label attached at allocation.
    pub fn labeled_action(
        &mut self,
        behavior: BehaviorKey,
        target: Option<Target>,
        label: impl Into<Cow<'static, str>>,
    ) -> NodeId {
        self.push(Node::Action(ActionNode {
            behavior,
            target,
            label: Some(label.into()),
        }))
    }

    /// Attaches a name used in logs and traces.
    pub fn label(&mut self, id: NodeId, label: impl Into<Cow<'static, str>>) -> Result<NodeId, BuildError> {
        let slot = match self.nodes.get_mut(id.index()).ok_or(BuildError::UnknownNode(id))? {
            Node::Decision(d) => &mut d.label,
            Node::Action(a) => &mut a.label,
        };
        *slot = Some(label.into());
        Ok(id)
    }

    pub fn on_true(&mut self, parent: NodeId, child: NodeId) -> Result<(), BuildError> {
        self.wire(parent, Branch::True, child)
    }

    pub fn on_false(&mut self, parent: NodeId, child: NodeId) -> Result<(), BuildError> {
        self.wire(parent, Branch::False, child)
    }

    /// Wires both branches at once.
    pub fn branches(&mut self, parent: NodeId, on_true: NodeId, on_false: NodeId) -> Result<(), BuildError> {
        self.wire(parent, Branch::True, on_true)?;
        self.wire(parent, Branch::False, on_false)
    }

    fn push(&mut self, node: Node) -> NodeId {
        match NodeId::from_index(self.nodes.len()) {
            Some(id) => {
                self.nodes.push(node);
                id
            }
            None => {
                self.overflowed = true;
                NodeId(u32::MAX)
            }
        }
    }

    fn wire(&mut self, parent: NodeId, branch: Branch, child: NodeId) -> Result<(), BuildError> {
        if child.index() >= self.nodes.len() {
            return Err(BuildError::UnknownNode(child));
        }
        match self.nodes.get_mut(parent.index()) {
            None => Err(BuildError::UnknownNode(parent)),
            Some(Node::Action(_)) => Err(BuildError::NotADecision(parent)),
            Some(Node::Decision(d)) => {
                match branch {
                    Branch::True => d.on_true = Some(child),
                    Branch::False => d.on_false = Some(child),
                }
                Ok(())
            }
        }
    }

    /// Validates the graph reachable from `root` and binds it to an agent.
    ///
    /// Every reachable decision must have both branches, every key must be registered, and no
    /// node may reach itself. Nodes that are allocated but unreachable are kept and ignored.
    pub fn build(self, root: NodeId, binding: Binding<W::Agent>) -> Result<DecisionTree<W>, BuildError> {
        if self.overflowed {
            return Err(BuildError::TooManyNodes {
                limit: Self::MAX_NODES,
            });
        }
        self.validate(root)?;
        Ok(self.build_unchecked(root, binding))
    }

    /// Skips validation. Structural faults surface per pass as [`crate::PassError`]s instead;
    /// nodes dropped for exceeding [`TreeBuilder::MAX_NODES`] show up as unknown nodes.
    pub fn build_unchecked(self, root: NodeId, binding: Binding<W::Agent>) -> DecisionTree<W> {
        DecisionTree::from_parts(self.name, self.nodes, root, binding, self.registries)
    }

    fn validate(&self, root: NodeId) -> Result<(), BuildError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Unseen,
            OnStack,
            Done,
        }

        if root.index() >= self.nodes.len() {
            return Err(BuildError::UnknownNode(root));
        }

        let mut marks = vec![Mark::Unseen; self.nodes.len()];
        // (node, entered) pairs; a node is finished when it is popped with `entered == true`.
        let mut stack = vec![(root, false)];

        while let Some((id, entered)) = stack.pop() {
            if entered {
                marks[id.index()] = Mark::Done;
                continue;
            }
            match marks[id.index()] {
                Mark::Done => continue,
                Mark::OnStack => return Err(BuildError::Cycle { node: id }),
                Mark::Unseen => {}
            }
            marks[id.index()] = Mark::OnStack;
            stack.push((id, true));

            match &self.nodes[id.index()] {
                Node::Action(a) => {
                    if !self.registries.behaviors.contains(a.behavior) {
                        return Err(BuildError::UnknownBehavior {
                            node: id,
                            key: a.behavior,
                        });
                    }
                }
                Node::Decision(d) => {
                    if !self.registries.conditions.contains(d.condition) {
                        return Err(BuildError::UnknownCondition {
                            node: id,
                            key: d.condition,
                        });
                    }
                    for branch in [Branch::False, Branch::True] {
                        let child = d
                            .child(branch)
                            .ok_or(BuildError::MissingBranch { node: id, branch })?;
                        match marks[child.index()] {
                            Mark::OnStack => return Err(BuildError::Cycle { node: child }),
                            Mark::Done => {}
                            Mark::Unseen => stack.push((child, false)),
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
