//! Domain layer: tree structures, traversal engines and supporting containers
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod binary;
pub mod entities;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod recursion;
pub mod stack;

pub use arena::{NodeId, NodeRef, TreeArena, TreeNode};
pub use binary::{BinaryNode, BinaryTree};
pub use entities::*;
pub use error::{DomainError, TreeResult};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use recursion::power;
pub use stack::Stack;
