//! Application layer: sample data and use cases
//!
//! This layer orchestrates domain logic and applies user settings.

pub mod error;
pub mod samples;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
