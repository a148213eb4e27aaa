//! Binary tree with in-order, pre-order and post-order traversal.
//!
//! Each node owns its children through `Box`, so the tree shape (no sharing,
//! no cycles) holds by construction. Values carry no ordering invariant: this
//! is not a search tree, traversal order is purely structural.

use tracing::instrument;

use crate::domain::entities::BinaryOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: BinaryNode<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: BinaryNode<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Replaces the left subtree, returning the previous one.
    pub fn set_left(&mut self, child: BinaryNode<T>) -> Option<Box<BinaryNode<T>>> {
        self.left.replace(Box::new(child))
    }

    /// Replaces the right subtree, returning the previous one.
    pub fn set_right(&mut self, child: BinaryNode<T>) -> Option<Box<BinaryNode<T>>> {
        self.right.replace(Box::new(child))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[instrument(level = "trace", skip_all)]
    pub fn traverse_in_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.in_order(&mut visit);
    }

    #[instrument(level = "trace", skip_all)]
    pub fn traverse_pre_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.pre_order(&mut visit);
    }

    #[instrument(level = "trace", skip_all)]
    pub fn traverse_post_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.post_order(&mut visit);
    }

    fn in_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(left) = &self.left {
            left.in_order(visit);
        }
        visit(&self.value);
        if let Some(right) = &self.right {
            right.in_order(visit);
        }
    }

    fn pre_order<F: FnMut(&T)>(&self, visit: &mut F) {
        visit(&self.value);
        if let Some(left) = &self.left {
            left.pre_order(visit);
        }
        if let Some(right) = &self.right {
            right.pre_order(visit);
        }
    }

    fn post_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(left) = &self.left {
            left.post_order(visit);
        }
        if let Some(right) = &self.right {
            right.post_order(visit);
        }
        visit(&self.value);
    }

    fn children(&self) -> impl Iterator<Item = &BinaryNode<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

// Tear down with an explicit worklist; the derived drop recurses once per level
// and overflows the stack on degenerate (list-shaped) trees.
impl<T> Drop for BinaryNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<BinaryNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// A binary tree whose root may be absent.
///
/// The empty tree is a valid input for every traversal and produces no visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Option<Box<BinaryNode<T>>>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<BinaryNode<T>> for BinaryTree<T> {
    fn from(root: BinaryNode<T>) -> Self {
        Self::new(root)
    }
}

impl<T> BinaryTree<T> {
    pub fn new(root: BinaryNode<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn len(&self) -> usize {
        self.iter_pre_order().count()
    }

    /// Number of levels, 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&BinaryNode<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(|node| node.children()).collect();
        }
        height
    }

    #[instrument(level = "debug", skip_all)]
    pub fn traverse_in_order<F: FnMut(&T)>(&self, visit: F) {
        if let Some(root) = self.root() {
            root.traverse_in_order(visit);
        }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn traverse_pre_order<F: FnMut(&T)>(&self, visit: F) {
        if let Some(root) = self.root() {
            root.traverse_pre_order(visit);
        }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn traverse_post_order<F: FnMut(&T)>(&self, visit: F) {
        if let Some(root) = self.root() {
            root.traverse_post_order(visit);
        }
    }

    #[instrument(level = "debug", skip(self, visit))]
    pub fn traverse<F: FnMut(&T)>(&self, order: BinaryOrder, visit: F) {
        match order {
            BinaryOrder::InOrder => self.traverse_in_order(visit),
            BinaryOrder::PreOrder => self.traverse_pre_order(visit),
            BinaryOrder::PostOrder => self.traverse_post_order(visit),
        }
    }

    /// Values in `order`, collected into a vector.
    pub fn values(&self, order: BinaryOrder) -> Vec<&T> {
        match order {
            BinaryOrder::InOrder => self.iter_in_order().collect(),
            BinaryOrder::PreOrder => self.iter_pre_order().collect(),
            BinaryOrder::PostOrder => self.iter_post_order().collect(),
        }
    }

    pub fn iter_in_order(&self) -> InOrderIterator<'_, T> {
        InOrderIterator::new(self.root())
    }

    pub fn iter_pre_order(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator::new(self.root())
    }

    pub fn iter_post_order(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self.root())
    }
}

pub struct PreOrderIterator<'a, T> {
    stack: Vec<&'a BinaryNode<T>>,
}

impl<'a, T> PreOrderIterator<'a, T> {
    fn new(root: Option<&'a BinaryNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so left is popped first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

pub struct InOrderIterator<'a, T> {
    stack: Vec<&'a BinaryNode<T>>,
    current: Option<&'a BinaryNode<T>>,
}

impl<'a, T> InOrderIterator<'a, T> {
    fn new(root: Option<&'a BinaryNode<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

pub struct PostOrderIterator<'a, T> {
    stack: Vec<(&'a BinaryNode<T>, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(root: Option<&'a BinaryNode<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}
