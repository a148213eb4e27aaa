//! Domain entities: traversal strategies and search policy

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visiting order for binary trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOrder {
    /// left, node, right
    InOrder,
    /// node, left, right
    PreOrder,
    /// left, right, node
    PostOrder,
}

impl BinaryOrder {
    pub const ALL: [BinaryOrder; 3] = [
        BinaryOrder::InOrder,
        BinaryOrder::PreOrder,
        BinaryOrder::PostOrder,
    ];
}

impl fmt::Display for BinaryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOrder::InOrder => "in-order",
            BinaryOrder::PreOrder => "pre-order",
            BinaryOrder::PostOrder => "post-order",
        };
        write!(f, "{}", name)
    }
}

/// Visiting order for n-ary trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaryOrder {
    /// Node first, then each child subtree in child order.
    DepthFirst,
    /// All nodes of one depth before any node of the next.
    LevelOrder,
}

impl NaryOrder {
    pub const ALL: [NaryOrder; 2] = [NaryOrder::DepthFirst, NaryOrder::LevelOrder];
}

impl fmt::Display for NaryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NaryOrder::DepthFirst => "depth-first",
            NaryOrder::LevelOrder => "level-order",
        };
        write!(f, "{}", name)
    }
}

/// Which node `search` reports when several nodes hold the target value.
///
/// Both policies walk in level order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPolicy {
    /// Stop at the first match.
    #[default]
    First,
    /// Sweep the whole tree, the last match wins.
    Last,
}

impl fmt::Display for SearchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPolicy::First => write!(f, "first"),
            SearchPolicy::Last => write!(f, "last"),
        }
    }
}
