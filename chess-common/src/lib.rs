//! Common utilities for the chess session client
//!
//! This crate provides the coordinate conversions and piece types shared by
//! the client library and the terminal driver.

pub mod converters;
pub mod types;

// Re-export commonly used items
pub use converters::*;
pub use types::*;
