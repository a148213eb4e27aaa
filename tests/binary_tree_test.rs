//! Tests for binary tree traversal

use rstest::{fixture, rstest};

use treewalk::application::samples;
use treewalk::domain::{BinaryNode, BinaryOrder, BinaryTree};
use treewalk::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn numbers() -> BinaryTree<i32> {
    samples::numbers()
}

fn visit_all(tree: &BinaryTree<i32>, order: BinaryOrder) -> Vec<i32> {
    let mut visited = Vec::new();
    tree.traverse(order, |v| visited.push(*v));
    visited
}

// ============================================================
// Sample Tree Orders
// ============================================================

#[rstest]
#[case(BinaryOrder::InOrder, vec![1, 9, 3, 10, 4, 2, 6])]
#[case(BinaryOrder::PreOrder, vec![10, 9, 1, 3, 2, 4, 6])]
#[case(BinaryOrder::PostOrder, vec![1, 3, 9, 4, 6, 2, 10])]
fn given_sample_tree_when_traversing_then_visits_in_expected_order(
    numbers: BinaryTree<i32>,
    #[case] order: BinaryOrder,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(visit_all(&numbers, order), expected);
}

#[rstest]
fn given_sample_tree_when_calling_named_traversals_then_match_dispatch(numbers: BinaryTree<i32>) {
    let mut in_order = Vec::new();
    let mut pre_order = Vec::new();
    let mut post_order = Vec::new();

    numbers.traverse_in_order(|v| in_order.push(*v));
    numbers.traverse_pre_order(|v| pre_order.push(*v));
    numbers.traverse_post_order(|v| post_order.push(*v));

    assert_eq!(in_order, visit_all(&numbers, BinaryOrder::InOrder));
    assert_eq!(pre_order, visit_all(&numbers, BinaryOrder::PreOrder));
    assert_eq!(post_order, visit_all(&numbers, BinaryOrder::PostOrder));
}

#[rstest]
fn given_any_order_when_traversing_then_visits_each_node_once(numbers: BinaryTree<i32>) {
    let mut reference = visit_all(&numbers, BinaryOrder::InOrder);
    reference.sort();

    for order in BinaryOrder::ALL {
        let mut visited = visit_all(&numbers, order);
        assert_eq!(visited.len(), numbers.len(), "{}", order);
        visited.sort();
        assert_eq!(visited, reference, "{}", order);
    }
}

#[rstest]
fn given_sample_tree_when_iterating_then_matches_visitor_order(numbers: BinaryTree<i32>) {
    let in_order: Vec<i32> = numbers.iter_in_order().copied().collect();
    let pre_order: Vec<i32> = numbers.iter_pre_order().copied().collect();
    let post_order: Vec<i32> = numbers.iter_post_order().copied().collect();

    assert_eq!(in_order, visit_all(&numbers, BinaryOrder::InOrder));
    assert_eq!(pre_order, visit_all(&numbers, BinaryOrder::PreOrder));
    assert_eq!(post_order, visit_all(&numbers, BinaryOrder::PostOrder));
}

// ============================================================
// Edge Cases
// ============================================================

#[test]
fn given_empty_tree_when_traversing_then_visits_nothing() {
    let tree: BinaryTree<i32> = BinaryTree::empty();
    for order in BinaryOrder::ALL {
        assert!(visit_all(&tree, order).is_empty(), "{}", order);
    }
    assert_eq!(tree.iter_in_order().count(), 0);
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
}

#[test]
fn given_single_node_when_traversing_then_visits_once() {
    let tree = BinaryTree::from(BinaryNode::new(42));
    for order in BinaryOrder::ALL {
        assert_eq!(visit_all(&tree, order), vec![42], "{}", order);
    }
}

//   1
//    \
//     2
//    /
//   3
#[test]
fn given_lopsided_tree_when_traversing_then_absent_children_are_skipped() {
    let tree = BinaryTree::new(
        BinaryNode::new(1).with_right(BinaryNode::new(2).with_left(BinaryNode::new(3))),
    );

    assert_eq!(visit_all(&tree, BinaryOrder::InOrder), vec![1, 3, 2]);
    assert_eq!(visit_all(&tree, BinaryOrder::PreOrder), vec![1, 2, 3]);
    assert_eq!(visit_all(&tree, BinaryOrder::PostOrder), vec![3, 2, 1]);
}

#[test]
fn given_nodes_wired_after_creation_when_traversing_then_uses_new_links() {
    let mut root = BinaryNode::new('b');
    root.set_left(BinaryNode::new('a'));
    root.set_right(BinaryNode::new('c'));
    let tree = BinaryTree::new(root);

    let in_order: String = tree.iter_in_order().collect();
    assert_eq!(in_order, "abc");
}

#[test]
fn given_degenerate_deep_tree_when_iterating_and_dropping_then_does_not_overflow() {
    // Arrange: a left-leaning chain far deeper than the recursion limit
    let depth = 200_000;
    let mut node = BinaryNode::new(0u32);
    for value in 1..depth {
        node = BinaryNode::new(value).with_left(node);
    }
    let tree = BinaryTree::new(node);

    // Act / Assert: explicit-stack iterators and drop handle it
    assert_eq!(tree.iter_post_order().count(), depth as usize);
    assert_eq!(tree.iter_in_order().next(), Some(&0));
    assert_eq!(tree.height(), depth as usize);
    drop(tree);
}
