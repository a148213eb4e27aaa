//! Built-in sample trees used by the CLI and the tests.

use crate::application::ApplicationResult;
use crate::domain::{BinaryNode, BinaryTree, NodeId, TreeArena};

/// ```text
///        10
///      /    \
///     9      2
///    / \    / \
///   1   3  4   6
/// ```
pub fn numbers() -> BinaryTree<i32> {
    let nine = BinaryNode::new(9)
        .with_left(BinaryNode::new(1))
        .with_right(BinaryNode::new(3));
    let two = BinaryNode::new(2)
        .with_left(BinaryNode::new(4))
        .with_right(BinaryNode::new(6));
    BinaryTree::new(BinaryNode::new(10).with_left(nine).with_right(two))
}

/// ```text
/// Beverages
/// ├── Hot
/// │   ├── Tea
/// │   └── Coffee
/// └── Cold
///     ├── Soda
///     └── Milk
/// ```
///
/// Returns the arena together with the handle of its root.
pub fn beverages() -> ApplicationResult<(TreeArena<String>, NodeId)> {
    let mut tree = TreeArena::with_capacity(7);
    let beverages = tree.new_node("Beverages".to_string());

    let hot = tree.insert_child(beverages, "Hot".to_string())?;
    tree.insert_child(hot, "Tea".to_string())?;
    tree.insert_child(hot, "Coffee".to_string())?;

    let cold = tree.insert_child(beverages, "Cold".to_string())?;
    tree.insert_child(cold, "Soda".to_string())?;
    tree.insert_child(cold, "Milk".to_string())?;

    Ok((tree, beverages))
}
