//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod traversal;

pub use traversal::{SearchOutcome, TraversalReport, TraversalService};
