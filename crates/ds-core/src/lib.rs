//! ds-core: shared error type, dimension value type, and configuration.
//!
//! This crate is the foundational dependency for the other ds-* crates.

pub mod config;
pub mod dimensions;
pub mod error;

// Re-export the most commonly used items at the crate root.
pub use dimensions::Dimensions;
pub use error::{Error, Result};
