//! Traversal service
//!
//! Runs traversals and searches with the user's settings applied and turns
//! the visits into printable reports.

use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::{BinaryOrder, BinaryTree, NaryOrder, NodeRef, SearchPolicy};

/// Values visited by one traversal, in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    /// Strategy name, e.g. "in-order"
    pub label: String,
    pub values: Vec<String>,
}

/// Result of a search over an n-ary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub policy: SearchPolicy,
    /// Value of the matched node, `None` if nothing matched
    pub found: Option<String>,
    /// Zero-based position of the match in level order
    pub position: Option<usize>,
    /// Number of children of the matched node
    pub children: usize,
}

/// Service for running traversals with configured output settings.
pub struct TraversalService {
    settings: Settings,
}

impl TraversalService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run each binary `order` over `tree` through the visitor interface.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn binary<T: Display>(
        &self,
        tree: &BinaryTree<T>,
        orders: &[BinaryOrder],
    ) -> Vec<TraversalReport> {
        orders
            .iter()
            .map(|&order| {
                let mut values = Vec::new();
                tree.traverse(order, |value| values.push(value.to_string()));
                debug!("{}: {} visits", order, values.len());
                TraversalReport {
                    label: order.to_string(),
                    values,
                }
            })
            .collect()
    }

    /// Run each n-ary `order` starting at `root` through the visitor interface.
    #[instrument(level = "debug", skip(self, root))]
    pub fn nary<T: Display>(&self, root: NodeRef<'_, T>, orders: &[NaryOrder]) -> Vec<TraversalReport> {
        orders
            .iter()
            .map(|&order| {
                let mut values = Vec::new();
                root.traverse(order, |value| values.push(value.to_string()));
                debug!("{}: {} visits", order, values.len());
                TraversalReport {
                    label: order.to_string(),
                    values,
                }
            })
            .collect()
    }

    /// Search below `root`; `policy` falls back to the configured one.
    #[instrument(level = "debug", skip(self, root, value))]
    pub fn search<T: PartialEq + Display>(
        &self,
        root: NodeRef<'_, T>,
        value: &T,
        policy: Option<SearchPolicy>,
    ) -> SearchOutcome {
        let policy = policy.unwrap_or(self.settings.search_policy);
        match root.search_with(value, policy) {
            Some(node) => SearchOutcome {
                policy,
                found: Some(node.value().to_string()),
                position: root.iter_level_order().position(|n| n.id() == node.id()),
                children: node.children().count(),
            },
            None => SearchOutcome {
                policy,
                found: None,
                position: None,
                children: 0,
            },
        }
    }

    /// Join the visited values with the configured separator.
    pub fn format(&self, report: &TraversalReport) -> String {
        report.values.iter().join(&self.settings.separator)
    }
}
