//! dimstore - record image dimensions in a database
//!
//! This library crate exposes the command dispatcher for integration testing.

pub mod dispatch;

pub use dispatch::{dispatch, Command, USAGE};
