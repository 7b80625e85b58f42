//! Concrete traversal scenarios

use morris::{tree, Traversal, TraversalConfig, Tree, TreeError};
use test_case::test_case;

mod common;
use common::{left_chain, right_chain};

#[test]
fn sample_tree_sequence() {
    let mut tree = tree::sample();
    assert_eq!(tree.in_order(), vec![4, 2, 5, 1, 3]);
}

#[test]
fn empty_tree_yields_nothing() {
    let mut tree: Tree<i64> = Tree::new();
    assert!(tree.in_order().is_empty());
}

#[test]
fn single_node_yields_its_value() {
    let (mut tree, _) = Tree::with_root(42i64);
    assert_eq!(tree.in_order(), vec![42]);
}

#[test_case(1 ; "one node")]
#[test_case(2 ; "two nodes")]
#[test_case(7 ; "seven nodes")]
#[test_case(10_000 ; "deep chain")]
fn left_chain_ascends(n: i64) {
    let mut tree = left_chain(n);
    let expected: Vec<i64> = (1..=n).collect();

    let report = Traversal::new(TraversalConfig::checked())
        .run(&mut tree, &mut Vec::new())
        .expect("verified run");
    assert_eq!(tree.in_order(), expected);

    // Every node but the leaf carries a thread at once on the way down
    assert_eq!(report.stats.peak_live_threads, (n - 1) as usize);
}

#[test_case(1 ; "one node")]
#[test_case(2 ; "two nodes")]
#[test_case(7 ; "seven nodes")]
#[test_case(10_000 ; "deep chain")]
fn right_chain_ascends(n: i64) {
    let mut tree = right_chain(n);
    let expected: Vec<i64> = (1..=n).collect();

    let stats = morris::morris_in_order(&mut tree, &mut Vec::new());
    assert_eq!(tree.in_order(), expected);

    // No left children, so nothing to thread
    assert_eq!(stats.threads_installed, 0);
    assert_eq!(stats.predecessor_steps, 0);
}

#[test_case(left_chain(1_000_000) ; "left spine")]
#[test_case(right_chain(1_000_000) ; "right spine")]
fn check_handles_million_node_chains(mut tree: Tree<i64>) {
    let (values, report) = Traversal::default()
        .check(&mut tree)
        .expect("deep chains verify against the reference");

    assert_eq!(values.len(), 1_000_000);
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(report.stats.threads_balanced());
}

#[test_case("1,2,3,4,5", &[4, 2, 5, 1, 3] ; "sample")]
#[test_case("[1,null,2,3]", &[1, 3, 2] ; "right then left")]
#[test_case("[]", &[] ; "empty brackets")]
#[test_case("null", &[] ; "lone hole")]
#[test_case("5 3 8 1 4 _ 9", &[1, 3, 4, 5, 8, 9] ; "search tree")]
#[test_case("1 2 # 3 # 4", &[4, 3, 2, 1] ; "left spine")]
#[test_case("-1, -2, -3", &[-2, -1, -3] ; "negative values")]
#[test_case(&deep_spine_input(20_000), &(1..=20_000).collect::<Vec<_>>() ; "deep level order spine")]
fn level_order_sequences(input: &str, expected: &[i64]) {
    let mut tree: Tree<i64> = input.parse().expect("valid level order");
    let (values, _) = Traversal::default().check(&mut tree).expect("matches reference");
    assert_eq!(values, expected);
}

#[test_case("1,x,3", TreeError::InvalidToken { position: 1, token: "x".into() } ; "bad token")]
#[test_case("1 null null 4", TreeError::OrphanEntry { position: 3 } ; "orphan")]
fn level_order_errors(input: &str, expected: TreeError) {
    let err = input.parse::<Tree<i64>>().unwrap_err();
    assert_eq!(err, expected);
}

#[test]
fn traversal_ignores_detached_nodes() {
    let (mut tree, root) = Tree::with_root(2i64);
    tree.insert_left(root, 1).unwrap();
    let stray = tree.add_node(99);
    tree.insert_right(stray, 100).unwrap();

    assert_eq!(tree.in_order(), vec![1, 2]);
}

#[test]
fn closure_sink_sees_values_in_order() {
    let mut tree = tree::sample();
    let mut seen = Vec::new();
    morris::morris_in_order(
        &mut tree,
        &mut morris::traversal::sink::from_fn(|v: &i64| seen.push(v * 10)),
    );
    assert_eq!(seen, vec![40, 20, 50, 10, 30]);
}

#[test]
fn generic_payloads_work() {
    let mut tree: Tree<String> = "b a c".parse().unwrap();
    assert_eq!(tree.in_order(), vec!["a", "b", "c"]);
}

/// Level-order text for a left spine `depth, depth - 1, ..., 1`
fn deep_spine_input(depth: i64) -> String {
    let mut input = depth.to_string();
    for value in (1..depth).rev() {
        input.push_str(&format!(" {} null", value));
    }
    input
}
