//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the tree-shape invariant.
/// Traversals themselves never fail; only wiring nodes together can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found in arena: {0:?}")]
    NodeNotFound(Index),

    #[error("node already has a parent: {0:?}")]
    AlreadyAttached(Index),

    #[error("node cannot be added as its own child: {0:?}")]
    SelfLoop(Index),

    #[error("cycle detected: {parent:?} is reachable from {child:?}")]
    CycleDetected { parent: Index, child: Index },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
