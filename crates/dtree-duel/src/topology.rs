//! The reference duel wiring.
//!
//! Priority, evaluated from the root every tick:
//! 1. own health critical: flee a visible opponent, else grab a visible health kit, else fall
//!    through to the power-up search
//! 2. opponent not visible: power-up search (shared with 1): wander if already powered, else
//!    grab a visible power-up, else wander
//! 3. opponent visible and critical: wander
//! 4. opponent visible: flee a powered opponent unless powered too; otherwise attack in range
//!    or approach
//!
//! Flee, wander, the power-up search and the range check are single nodes reused by several
//! parents.

use std::sync::Arc;

use dtree_core::Binding;
use dtree_tree::{
    BehaviorRegistry, BuildError, ConditionRegistry, DecisionTree, Registries, Target, TreeBuilder,
};

use crate::arena::ArenaMut;
use crate::behaviors::{self, ATTACK, FLEE, MOVE_TO, WANDER};
use crate::conditions::{
    self, ENEMY_HEALTH_CRITICAL, ENEMY_POWERED_UP, HEALTH_CRITICAL, IN_ATTACK_RANGE,
    OBJECT_IN_SIGHT, POWERED_UP,
};
use crate::config::{Advantage, DuelConfig};

/// Registries holding every duel condition and behavior. Build once and share.
pub fn duel_registries<W>(config: &DuelConfig) -> Arc<Registries<W>>
where
    W: ArenaMut + 'static,
{
    let mut conds = ConditionRegistry::new();
    conditions::register(&mut conds, config);
    let mut behs = BehaviorRegistry::new();
    behaviors::register(&mut behs);
    Arc::new(Registries::new(conds, behs))
}

pub fn build_duel_tree<W>(
    registries: Arc<Registries<W>>,
    binding: Binding<W::Agent>,
    config: &DuelConfig,
) -> Result<DecisionTree<W>, BuildError>
where
    W: ArenaMut + 'static,
{
    let health_kit = Target::object(config.health_kit.clone());
    let power_up = Target::object(config.power_up.clone());

    let mut b = TreeBuilder::new("duel", registries);

    let flee = b.labeled_action(FLEE, Some(Target::Opponent), "flee");
    let wander = b.labeled_action(WANDER, None, "wander");
    let attack = b.labeled_action(ATTACK, Some(Target::Opponent), "attack");
    let approach = b.labeled_action(MOVE_TO, Some(Target::Opponent), "approach_enemy");
    let grab_health = b.labeled_action(MOVE_TO, Some(health_kit.clone()), "grab_health_kit");
    let grab_power = b.labeled_action(MOVE_TO, Some(power_up.clone()), "grab_power_up");

    let root = b.labeled_decision(HEALTH_CRITICAL, None, "health_critical");

    // Power-up search, reached from both the low-health and the no-enemy routes.
    let powered = b.labeled_decision(POWERED_UP, None, "powered_up");
    let power_in_sight = b.labeled_decision(OBJECT_IN_SIGHT, Some(power_up), "power_up_in_sight");
    b.branches(powered, wander, power_in_sight)?;
    b.branches(power_in_sight, grab_power, wander)?;

    // Low health.
    let low_enemy_in_sight =
        b.labeled_decision(OBJECT_IN_SIGHT, Some(Target::Opponent), "low_health_enemy_in_sight");
    let health_in_sight = b.labeled_decision(OBJECT_IN_SIGHT, Some(health_kit), "health_kit_in_sight");
    b.branches(low_enemy_in_sight, flee, health_in_sight)?;
    b.branches(health_in_sight, grab_health, powered)?;

    // Healthy.
    let enemy_in_sight = b.labeled_decision(OBJECT_IN_SIGHT, Some(Target::Opponent), "enemy_in_sight");
    let enemy_critical = b.labeled_decision(ENEMY_HEALTH_CRITICAL, None, "enemy_health_critical");
    let enemy_powered = b.labeled_decision(ENEMY_POWERED_UP, None, "enemy_powered_up");
    let powered_vs_plain = b.labeled_decision(POWERED_UP, None, "powered_vs_unpowered_enemy");
    let powered_vs_powered = b.labeled_decision(POWERED_UP, None, "powered_vs_powered_enemy");
    let in_range = b.labeled_decision(IN_ATTACK_RANGE, None, "in_attack_range");

    b.branches(enemy_in_sight, enemy_critical, powered)?;
    // Disengages from a nearly dead opponent. Kept as shipped; it looks like a bug (one would
    // expect the agent to finish the fight) but hosts compare against this behavior.
    b.branches(enemy_critical, wander, enemy_powered)?;
    b.branches(enemy_powered, powered_vs_powered, powered_vs_plain)?;
    b.branches(powered_vs_powered, in_range, flee)?;
    let with_advantage = match config.advantage {
        Advantage::Engage => in_range,
        Advantage::Hold => wander,
    };
    b.branches(powered_vs_plain, with_advantage, in_range)?;
    b.branches(in_range, attack, approach)?;

    b.branches(root, low_enemy_in_sight, enemy_in_sight)?;

    b.build(root, binding)
}

/// Builds mirrored trees for both duelists, sharing one set of registries.
pub fn build_duel_pair<W>(
    registries: Arc<Registries<W>>,
    first: W::Agent,
    second: W::Agent,
    config: &DuelConfig,
) -> Result<(DecisionTree<W>, DecisionTree<W>), BuildError>
where
    W: ArenaMut + 'static,
{
    let binding = Binding::new(first, second);
    let a = build_duel_tree(Arc::clone(&registries), binding, config)?;
    let b = build_duel_tree(registries, binding.mirrored(), config)?;
    Ok((a, b))
}
