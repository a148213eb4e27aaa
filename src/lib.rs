//! Generic binary and n-ary trees with their classic traversals.
//!
//! - [`domain::BinaryTree`]: in-order, pre-order and post-order
//! - [`domain::TreeArena`]: depth-first and level-order traversal plus search
//! - [`domain::Queue`], [`domain::Stack`], [`domain::LinkedList`]: supporting containers

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
