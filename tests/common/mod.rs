#![allow(dead_code)]

use morris::{NodeId, Side, Tree};

/// Left-leaning chain: root = n, root.left = n - 1, ..., leaf = 1
///
/// Built bottom-up so each attach only inspects a detached parent.
pub fn left_chain(n: i64) -> Tree<i64> {
    chain(n, Side::Left, (1..=n).collect())
}

/// Right-leaning chain: root = 1, root.right = 2, ..., leaf = n
pub fn right_chain(n: i64) -> Tree<i64> {
    chain(n, Side::Right, (1..=n).rev().collect())
}

fn chain(n: i64, side: Side, bottom_up: Vec<i64>) -> Tree<i64> {
    let mut tree = Tree::new();
    let mut below: Option<NodeId> = None;
    for value in bottom_up {
        let id = tree.add_node(value);
        if let Some(child) = below {
            tree.attach(id, side, child).expect("chain attach");
        }
        below = Some(id);
    }
    if let Some(root) = below {
        tree.set_root(root).expect("chain root");
    }
    assert_eq!(tree.len() as i64, n);
    tree
}

/// Build a tree from `(value, slot_choice)` pairs
///
/// The first pair is the root; every later value fills one of the open
/// child slots, picked by `slot_choice`. Any input yields a valid tree.
pub fn build_random(spec: &[(i64, u16)]) -> Tree<i64> {
    let Some(((root_value, _), rest)) = spec.split_first() else {
        return Tree::new();
    };

    let (mut tree, root) = Tree::with_root(*root_value);
    let mut open = vec![(root, Side::Left), (root, Side::Right)];
    for &(value, choice) in rest {
        let (parent, side) = open.swap_remove(choice as usize % open.len());
        let child = tree.add_node(value);
        tree.attach(parent, side, child).expect("open slot is free");
        open.push((child, Side::Left));
        open.push((child, Side::Right));
    }
    tree
}

/// Recursive in-order through the public accessors only
pub fn naive_in_order(tree: &Tree<i64>) -> Vec<i64> {
    fn go(tree: &Tree<i64>, id: Option<NodeId>, out: &mut Vec<i64>) {
        if let Some(id) = id {
            go(tree, tree.left(id), out);
            out.push(*tree.value(id).expect("reachable node"));
            go(tree, tree.right(id), out);
        }
    }

    let mut out = Vec::new();
    go(tree, tree.root(), &mut out);
    out
}

/// Reachable nodes that have a left child
pub fn nodes_with_left_child(tree: &Tree<i64>) -> usize {
    let mut count = 0;
    let mut pending: Vec<NodeId> = tree.root().into_iter().collect();
    while let Some(id) = pending.pop() {
        if let Some(left) = tree.left(id) {
            count += 1;
            pending.push(left);
        }
        pending.extend(tree.right(id));
    }
    count
}
