//! Named, side-effect-free checks. Each one sees the world through `&W` only.

use dtree_core::{Binding, TickContext};
use dtree_tree::{ConditionKey, ConditionRegistry, Target};

use crate::arena::{percept_for, ArenaMut, ArenaView};
use crate::config::DuelConfig;

pub const HEALTH_CRITICAL: ConditionKey = ConditionKey("health_critical");
pub const ENEMY_HEALTH_CRITICAL: ConditionKey = ConditionKey("enemy_health_critical");
pub const OBJECT_IN_SIGHT: ConditionKey = ConditionKey("object_in_sight");
pub const IN_ATTACK_RANGE: ConditionKey = ConditionKey("in_attack_range");
pub const POWERED_UP: ConditionKey = ConditionKey("powered_up");
pub const ENEMY_POWERED_UP: ConditionKey = ConditionKey("enemy_powered_up");

pub fn health_below<W: ArenaView + 'static>(
    threshold: i32,
) -> impl Fn(&TickContext, Binding<W::Agent>, &W, Option<&Target>) -> bool + Send + Sync + 'static {
    move |_ctx, b, world, _target| world.hit_points(b.agent) < threshold
}

pub fn enemy_health_below<W: ArenaView + 'static>(
    threshold: i32,
) -> impl Fn(&TickContext, Binding<W::Agent>, &W, Option<&Target>) -> bool + Send + Sync + 'static {
    move |_ctx, b, world, _target| world.hit_points(b.opponent) < threshold
}

/// False when no target token is given.
pub fn object_in_sight<W: ArenaView>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &W,
    target: Option<&Target>,
) -> bool {
    target.is_some_and(|t| world.is_object_in_view(b.agent, percept_for(b, t)))
}

pub fn in_attack_range<W: ArenaView>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &W,
    _target: Option<&Target>,
) -> bool {
    world.is_in_attack_range(b.agent, b.opponent)
}

pub fn powered_up<W: ArenaView>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &W,
    _target: Option<&Target>,
) -> bool {
    world.has_power_up(b.agent)
}

pub fn enemy_powered_up<W: ArenaView>(
    _ctx: &TickContext,
    b: Binding<W::Agent>,
    world: &W,
    _target: Option<&Target>,
) -> bool {
    world.has_power_up(b.opponent)
}

pub fn register<W>(registry: &mut ConditionRegistry<W>, config: &DuelConfig)
where
    W: ArenaMut + 'static,
{
    registry.register(HEALTH_CRITICAL, health_below::<W>(config.critical_health));
    registry.register(ENEMY_HEALTH_CRITICAL, enemy_health_below::<W>(config.critical_health));
    registry.register(OBJECT_IN_SIGHT, object_in_sight::<W>);
    registry.register(IN_ATTACK_RANGE, in_attack_range::<W>);
    registry.register(POWERED_UP, powered_up::<W>);
    registry.register(ENEMY_POWERED_UP, enemy_powered_up::<W>);
}
