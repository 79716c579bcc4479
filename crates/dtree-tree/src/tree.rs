use std::borrow::Cow;
use std::sync::Arc;

use dtree_core::{AgentId, Binding, Liveness, TickContext, WorldMut};
use dtree_tools::{NullTraceSink, TraceEvent, TraceSink};

use crate::error::PassError;
use crate::node::{Branch, Effect, Node, NodeId, PassScope, Target};
use crate::registry::{BehaviorKey, Registries};

pub const TRACE_DECIDE: &str = "dtree.decide";
pub const TRACE_ACT: &str = "dtree.act";
pub const TRACE_SKIP: &str = "dtree.skip";
pub const TRACE_ABORT: &str = "dtree.abort";

/// What one successful pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Every node visited, root first, action last.
    pub path: Vec<NodeId>,
    pub action: NodeId,
    pub behavior: BehaviorKey,
    pub target: Option<Target>,
    pub effect: Effect,
}

impl PassReport {
    /// Edges walked from the root to the action.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A frozen node arena bound to one agent.
///
/// The tree keeps no state between passes; every pass is a fresh descent from the root.
pub struct DecisionTree<W>
where
    W: WorldMut + 'static,
{
    name: Cow<'static, str>,
    nodes: Vec<Node>,
    root: NodeId,
    binding: Binding<W::Agent>,
    registries: Arc<Registries<W>>,
}

impl<W> DecisionTree<W>
where
    W: WorldMut + 'static,
{
    pub(crate) fn from_parts(
        name: Cow<'static, str>,
        nodes: Vec<Node>,
        root: NodeId,
        binding: Binding<W::Agent>,
        registries: Arc<Registries<W>>,
    ) -> Self {
        Self {
            name,
            nodes,
            root,
            binding,
            registries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn binding(&self) -> Binding<W::Agent> {
        self.binding
    }

    pub fn agent(&self) -> W::Agent {
        self.binding.agent
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn registries(&self) -> &Arc<Registries<W>> {
        &self.registries
    }

    /// Longest root-to-action path, in hops.
    ///
    /// `None` if the reachable graph is malformed (dangling or missing child, or a cycle).
    pub fn depth(&self) -> Option<usize> {
        fn walk(nodes: &[Node], id: NodeId, memo: &mut [Option<usize>], on_path: &mut [bool]) -> Option<usize> {
            let idx = id.index();
            let node = nodes.get(idx)?;
            if let Some(d) = memo[idx] {
                return Some(d);
            }
            if on_path[idx] {
                return None;
            }
            let depth = match node {
                Node::Action(_) => 0,
                Node::Decision(d) => {
                    on_path[idx] = true;
                    let t = walk(nodes, d.on_true?, memo, on_path)?;
                    let f = walk(nodes, d.on_false?, memo, on_path)?;
                    on_path[idx] = false;
                    1 + t.max(f)
                }
            };
            memo[idx] = Some(depth);
            Some(depth)
        }

        let mut memo = vec![None; self.nodes.len()];
        let mut on_path = vec![false; self.nodes.len()];
        walk(&self.nodes, self.root, &mut memo, &mut on_path)
    }

    /// One pass: descend from the root to an action node and run it exactly once.
    pub fn run(&self, ctx: &TickContext, world: &mut W) -> Result<PassReport, PassError> {
        self.run_traced(ctx, world, &mut NullTraceSink)
    }

    pub fn run_traced(
        &self,
        ctx: &TickContext,
        world: &mut W,
        sink: &mut dyn TraceSink,
    ) -> Result<PassReport, PassError> {
        match self.descend(ctx, world, sink) {
            Ok(report) => Ok(report),
            Err(err) => {
                tracing::warn!(
                    tree = %self.name,
                    agent = ?self.binding.agent,
                    tick = ctx.tick,
                    error = %err,
                    "decision pass aborted"
                );
                sink.emit(
                    TraceEvent::for_agent(ctx, self.binding.agent, TRACE_ABORT)
                        .with_node(err.node().raw()),
                );
                Err(err)
            }
        }
    }

    /// Host entry point: runs a pass only while the bound agent is alive.
    pub fn tick(&self, ctx: &TickContext, world: &mut W) -> Result<Option<PassReport>, PassError>
    where
        W: Liveness,
    {
        self.tick_traced(ctx, world, &mut NullTraceSink)
    }

    pub fn tick_traced(
        &self,
        ctx: &TickContext,
        world: &mut W,
        sink: &mut dyn TraceSink,
    ) -> Result<Option<PassReport>, PassError>
    where
        W: Liveness,
    {
        if !world.is_alive(self.binding.agent) {
            return Ok(None);
        }
        self.run_traced(ctx, world, sink).map(Some)
    }

    fn descend(
        &self,
        ctx: &TickContext,
        world: &mut W,
        sink: &mut dyn TraceSink,
    ) -> Result<PassReport, PassError> {
        let scope = PassScope {
            ctx,
            binding: self.binding,
            registries: &*self.registries,
        };
        let mut visited = vec![false; self.nodes.len()];
        let mut path = Vec::new();
        let mut current = self.root;

        loop {
            let node = self
                .node(current)
                .ok_or(PassError::UnknownNode { node: current })?;
            if std::mem::replace(&mut visited[current.index()], true) {
                return Err(PassError::Cycle { node: current });
            }
            path.push(current);

            let Node::Action(action) = node else {
                let step = node.evaluate(current, &scope, &*world)?;
                tracing::debug!(
                    tree = %self.name,
                    agent = ?self.binding.agent,
                    node = %current,
                    label = node.label().unwrap_or(""),
                    branch = %step.branch,
                    "decision"
                );
                sink.emit(
                    TraceEvent::for_agent(ctx, self.binding.agent, TRACE_DECIDE)
                        .with_node(current.raw())
                        .with_detail(matches!(step.branch, Branch::True) as u64),
                );
                current = step.next;
                continue;
            };

            let effect = node.execute(current, &scope, world)?;
            let tag = match &effect {
                Effect::Performed => TRACE_ACT,
                Effect::Skipped(reason) => {
                    tracing::debug!(
                        tree = %self.name,
                        agent = ?self.binding.agent,
                        node = %current,
                        reason = %reason,
                        "behavior skipped"
                    );
                    TRACE_SKIP
                }
            };
            sink.emit(
                TraceEvent::for_agent(ctx, self.binding.agent, tag).with_node(current.raw()),
            );

            return Ok(PassReport {
                path,
                action: current,
                behavior: action.behavior(),
                target: action.target().cloned(),
                effect,
            });
        }
    }
}

/// Per-frame totals from [`tick_trees`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub performed: usize,
    pub skipped: usize,
    pub dead: usize,
    pub failed: usize,
}

/// Ticks every tree once, in stable agent order.
///
/// Failures stay with the agent that produced them: they are logged and counted, and the
/// remaining trees still run.
pub fn tick_trees<W>(ctx: &TickContext, world: &mut W, trees: &mut [DecisionTree<W>]) -> TickSummary
where
    W: WorldMut + Liveness + 'static,
{
    trees.sort_by_key(|t| t.agent().stable_id());

    let mut summary = TickSummary::default();
    for tree in trees.iter() {
        match tree.tick(ctx, world) {
            Ok(Some(report)) if report.effect.is_performed() => summary.performed += 1,
            Ok(Some(_)) => summary.skipped += 1,
            Ok(None) => summary.dead += 1,
            Err(_) => summary.failed += 1,
        }
    }
    summary
}
