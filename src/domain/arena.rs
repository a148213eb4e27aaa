//! Arena-based n-ary tree with depth-first and level-order traversal.
//!
//! Nodes live in a generational arena and refer to their children by index.
//! A node holds no link back to its parent; the arena only remembers whether
//! a node has been attached somewhere, which is what keeps the structure a
//! tree (single owner per node, no cycles).

use std::fmt;
use std::ops::ControlFlow;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::{NaryOrder, SearchPolicy};
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::queue::Queue;

/// Stable handle to a node in a [`TreeArena`].
pub type NodeId = Index;

/// Tree node in the arena: one value and its ordered children.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub value: T,
    /// Child indices, in the order they were added
    children: Vec<NodeId>,
    /// Set once the node has been added as somebody's child
    attached: bool,
}

impl<T> TreeNode<T> {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Arena storage for one or more n-ary trees.
///
/// Any node that has not been added as a child is a root. Nodes are never
/// removed, so every handle handed out by [`TreeArena::new_node`] stays valid
/// for the arena's lifetime.
#[derive(Debug, Clone)]
pub struct TreeArena<T> {
    arena: Arena<TreeNode<T>>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    /// Allocates a detached node holding `value`.
    pub fn new_node(&mut self, value: T) -> NodeId {
        self.arena.insert(TreeNode {
            value,
            children: Vec::new(),
            attached: false,
        })
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// Rejects anything that would break the tree shape: unknown handles, a
    /// node added to itself, a child that already has a parent, or a child
    /// whose own subtree contains `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        if parent == child {
            return Err(DomainError::SelfLoop(child));
        }
        if !self.arena.contains(parent) {
            return Err(DomainError::NodeNotFound(parent));
        }
        let child_node = self
            .arena
            .get(child)
            .ok_or(DomainError::NodeNotFound(child))?;
        if child_node.attached {
            return Err(DomainError::AlreadyAttached(child));
        }
        if self.is_reachable(child, parent) {
            return Err(DomainError::CycleDetected { parent, child });
        }

        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.attached = true;
        }
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        Ok(())
    }

    /// Allocates a node holding `value` and appends it to `parent`.
    pub fn insert_child(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        if !self.arena.contains(parent) {
            return Err(DomainError::NodeNotFound(parent));
        }
        let child = self.new_node(value);
        self.add(parent, child)?;
        Ok(child)
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Borrowed view of a node, entry point for traversals.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.arena.get(id).map(|node| NodeRef {
            arena: self,
            id,
            node,
        })
    }

    /// All nodes that have not been attached to a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_, T>> {
        self.arena
            .iter()
            .filter(|(_, node)| !node.attached)
            .map(move |(id, node)| NodeRef {
                arena: self,
                id,
                node,
            })
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn is_reachable(&self, from: NodeId, target: NodeId) -> bool {
        self.node(from)
            .map(|node| node.iter_depth_first().any(|n| n.id() == target))
            .unwrap_or(false)
    }
}

/// A node borrowed from its arena.
///
/// Always refers to a live node, so traversals starting here cannot fail.
pub struct NodeRef<'a, T> {
    arena: &'a TreeArena<T>,
    id: NodeId,
    node: &'a TreeNode<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    pub fn is_leaf(&self) -> bool {
        self.node.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let arena = self.arena;
        let node = self.node;
        node.children
            .iter()
            .filter_map(move |&child| arena.node(child))
    }

    /// Visits this node, then each child subtree in child order.
    #[instrument(level = "trace", skip_all)]
    pub fn for_each_depth_first<F: FnMut(&T)>(&self, mut visit: F) {
        self.depth_first(&mut visit);
    }

    fn depth_first<F: FnMut(&T)>(&self, visit: &mut F) {
        visit(self.value());
        for child in self.children() {
            child.depth_first(visit);
        }
    }

    /// Visits nodes level by level, children in the order they were added.
    #[instrument(level = "trace", skip_all)]
    pub fn for_each_level_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk_level_order(|node| {
            visit(node.value());
            ControlFlow::Continue(())
        });
    }

    #[instrument(level = "debug", skip(self, visit))]
    pub fn traverse<F: FnMut(&T)>(&self, order: NaryOrder, visit: F) {
        match order {
            NaryOrder::DepthFirst => self.for_each_depth_first(visit),
            NaryOrder::LevelOrder => self.for_each_level_order(visit),
        }
    }

    /// Values in `order`, collected into a vector.
    pub fn values(&self, order: NaryOrder) -> Vec<&'a T> {
        match order {
            NaryOrder::DepthFirst => self.iter_depth_first().map(|n| n.value()).collect(),
            NaryOrder::LevelOrder => self.iter_level_order().map(|n| n.value()).collect(),
        }
    }

    // Root is visited straight away, the queue only ever holds the frontier.
    fn walk_level_order<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, T>) -> ControlFlow<()>,
    {
        if visit(*self).is_break() {
            return;
        }
        let mut queue = Queue::new();
        queue.extend(self.node.children.iter().copied());
        while let Some(id) = queue.dequeue() {
            if let Some(node) = self.arena.node(id) {
                if visit(node).is_break() {
                    return;
                }
                queue.extend(node.node.children.iter().copied());
            }
        }
    }

    pub fn iter_depth_first(&self) -> DepthFirstIterator<'a, T> {
        DepthFirstIterator {
            arena: self.arena,
            stack: vec![self.id],
        }
    }

    pub fn iter_level_order(&self) -> LevelOrderIterator<'a, T> {
        let mut queue = Queue::new();
        queue.enqueue(self.id);
        LevelOrderIterator {
            arena: self.arena,
            queue,
        }
    }

    /// Number of nodes in this subtree.
    pub fn subtree_len(&self) -> usize {
        self.iter_depth_first().count()
    }

    /// Number of levels in this subtree, 1 for a leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = Queue::new();
        queue.enqueue((*self, 1));
        while let Some((node, depth)) = queue.dequeue() {
            max_depth = max_depth.max(depth);
            queue.extend(node.children().map(|child| (child, depth + 1)));
        }
        max_depth
    }

    /// Values of all leaves, in depth-first order.
    pub fn leaf_values(&self) -> Vec<&'a T> {
        self.iter_depth_first()
            .filter(|node| node.is_leaf())
            .map(|node| node.value())
            .collect()
    }
}

impl<'a, T: PartialEq> NodeRef<'a, T> {
    /// Level-order search for `value`, first match wins.
    pub fn search(&self, value: &T) -> Option<NodeRef<'a, T>> {
        self.search_with(value, SearchPolicy::default())
    }

    /// Level-order search for `value` under an explicit duplicate policy.
    #[instrument(level = "debug", skip(self, value))]
    pub fn search_with(&self, value: &T, policy: SearchPolicy) -> Option<NodeRef<'a, T>> {
        let mut result = None;
        self.walk_level_order(|node| {
            if node.value() != value {
                return ControlFlow::Continue(());
            }
            result = Some(node);
            match policy {
                SearchPolicy::First => ControlFlow::Break(()),
                SearchPolicy::Last => ControlFlow::Continue(()),
            }
        });
        debug!(found = result.is_some(), "search finished");
        result
    }
}

/// Pre-order depth-first iterator driven by an explicit stack.
pub struct DepthFirstIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for DepthFirstIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.arena.node(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.node.children.iter().rev().copied());
                return Some(node);
            }
        }
        None
    }
}

/// Breadth-first iterator driven by a FIFO queue.
pub struct LevelOrderIterator<'a, T> {
    arena: &'a TreeArena<T>,
    queue: Queue<NodeId>,
}

impl<'a, T> Iterator for LevelOrderIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.queue.dequeue() {
            if let Some(node) = self.arena.node(current) {
                self.queue.extend(node.node.children.iter().copied());
                return Some(node);
            }
        }
        None
    }
}
