/*
Rendering trees as `termtree::Tree<String>` for terminal display.

Binary nodes with a single child print a `-` placeholder for the missing
side, otherwise left and right could not be told apart in the output.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{BinaryNode, BinaryTree, NodeRef, TreeArena};

const EMPTY_SIDE: &str = "-";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for NodeRef<'_, T> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children().map(|c| c.to_tree_string()).collect();

        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}

impl<T: Display> TreeNodeConvert for BinaryNode<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let mut tree = Tree::new(self.value.to_string());
        if self.is_leaf() {
            return tree;
        }
        for side in [&self.left, &self.right] {
            match side {
                Some(child) => tree.push(child.to_tree_string()),
                None => tree.push(Tree::new(EMPTY_SIDE.to_string())),
            };
        }
        tree
    }
}

impl<T: Display> TreeNodeConvert for BinaryTree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

// Every root in the arena becomes a top-level branch.
impl<T: Display> TreeNodeConvert for TreeArena<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let mut roots = self.roots();
        match (roots.next(), roots.next()) {
            (None, _) => Tree::new("Empty tree".to_string()),
            (Some(only), None) => only.to_tree_string(),
            (Some(first), Some(second)) => {
                let leaves: Vec<_> = [first, second]
                    .into_iter()
                    .chain(roots)
                    .map(|root| root.to_tree_string())
                    .collect();
                Tree::new("Forest".to_string()).with_leaves(leaves)
            }
        }
    }
}
