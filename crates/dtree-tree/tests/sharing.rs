mod common;

use common::{ctx, obj, registries, FlagWorld, FLAG, RECORD};
use dtree_core::Binding;
use dtree_tree::TreeBuilder;

#[test]
fn shared_action_behaves_the_same_from_every_parent() {
    let mut b = TreeBuilder::new("shared", registries());
    let root = b.decision(FLAG, obj("left"));
    let left = b.decision(FLAG, obj("x"));
    let right = b.decision(FLAG, obj("y"));
    let shared = b.action(RECORD, obj("shared"));
    let lx = b.action(RECORD, obj("left_only"));
    let ry = b.action(RECORD, obj("right_only"));
    b.branches(root, left, right).unwrap();
    b.branches(left, lx, shared).unwrap();
    b.branches(right, ry, shared).unwrap();
    let tree = b.build(root, Binding::new(1, 2)).unwrap();

    let mut via_left = FlagWorld::with_flags(&[("left", true)]);
    let mut via_right = FlagWorld::with_flags(&[("left", false)]);

    let a = tree.run(&ctx(0), &mut via_left).unwrap();
    let b = tree.run(&ctx(0), &mut via_right).unwrap();

    assert_eq!(a.action, shared);
    assert_eq!(b.action, shared);
    assert_ne!(a.path, b.path);
    assert_eq!((a.behavior, &a.target), (b.behavior, &b.target));
    assert_eq!(via_left.ran, via_right.ran);
}

#[test]
fn shared_decision_subtree_routes_identically() {
    let mut b = TreeBuilder::new("shared", registries());
    let root = b.decision(FLAG, obj("gate"));
    let detour = b.decision(FLAG, obj("detour"));
    let common = b.decision(FLAG, obj("pick"));
    let yes = b.action(RECORD, obj("yes"));
    let no = b.action(RECORD, obj("no"));
    let unreachable = b.action(RECORD, obj("unreachable"));
    b.branches(root, common, detour).unwrap();
    b.branches(detour, unreachable, common).unwrap();
    b.branches(common, yes, no).unwrap();
    let tree = b.build(root, Binding::new(1, 2)).unwrap();

    for pick in [true, false] {
        let mut direct = FlagWorld::with_flags(&[("gate", true), ("pick", pick)]);
        let mut indirect = FlagWorld::with_flags(&[("gate", false), ("detour", false), ("pick", pick)]);

        let d = tree.run(&ctx(0), &mut direct).unwrap();
        let i = tree.run(&ctx(0), &mut indirect).unwrap();

        assert_eq!(d.action, i.action);
        assert_eq!(d.path.last(), i.path.last());
        assert_eq!(i.path.len(), d.path.len() + 1);
    }
}
