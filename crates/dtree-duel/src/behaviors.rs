//! Named commands. Each one issues at most one arena command per call.

use dtree_core::{Binding, TickContext};
use dtree_tree::{BehaviorError, BehaviorKey, BehaviorRegistry, Target};

use crate::arena::{percept_for, ArenaMut};

pub const WANDER: BehaviorKey = BehaviorKey("wander");
pub const FLEE: BehaviorKey = BehaviorKey("flee");
pub const ATTACK: BehaviorKey = BehaviorKey("attack");
pub const MOVE_TO: BehaviorKey = BehaviorKey("move_to");

/// Stream id passed to [`TickContext::rng_for_agent`] for wandering.
pub const WANDER_STREAM: u64 = 0x5741_4e44;

pub fn wander<W: ArenaMut>(
    ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &mut W,
    _target: Option<&Target>,
) -> Result<(), BehaviorError> {
    tracing::debug!(agent = ?b.agent, "wandering");
    let mut rng = ctx.rng_for_agent(b.agent, WANDER_STREAM);
    world.random_wander(b.agent, &mut rng);
    Ok(())
}

/// Always flees from the bound opponent; the token is informational.
pub fn flee<W: ArenaMut>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &mut W,
    _target: Option<&Target>,
) -> Result<(), BehaviorError> {
    tracing::debug!(agent = ?b.agent, opponent = ?b.opponent, "fleeing");
    world.flee(b.agent, b.opponent);
    Ok(())
}

pub fn attack<W: ArenaMut>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &mut W,
    _target: Option<&Target>,
) -> Result<(), BehaviorError> {
    tracing::debug!(agent = ?b.agent, opponent = ?b.opponent, "attacking");
    world.attack(b.agent, b.opponent);
    Ok(())
}

/// Resolves the token against what the agent sees right now.
///
/// The tree checks visibility first, but the object may be gone by the time the action runs;
/// that case reports [`BehaviorError::UnresolvedTarget`] and leaves the world untouched.
pub fn move_to<W: ArenaMut>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &mut W,
    target: Option<&Target>,
) -> Result<(), BehaviorError> {
    let target = target.ok_or(BehaviorError::MissingTarget)?;
    let object = world
        .object_in_view(b.agent, percept_for(b, target))
        .ok_or_else(|| BehaviorError::UnresolvedTarget(target.clone()))?;
    tracing::debug!(agent = ?b.agent, target = %target, "moving to target");
    world.move_to(b.agent, object);
    Ok(())
}

pub fn register<W>(registry: &mut BehaviorRegistry<W>)
where
    W: ArenaMut + 'static,
{
    registry.register(WANDER, wander::<W>);
    registry.register(FLEE, flee::<W>);
    registry.register(ATTACK, attack::<W>);
    registry.register(MOVE_TO, move_to::<W>);
}
