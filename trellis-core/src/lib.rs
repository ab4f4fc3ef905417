//! Core utilities for the Trellis component scaffolder.
//!
//! This crate provides the pieces shared across the Trellis ecosystem:
//! the file writer with its conflict policies, the quiet-able logger,
//! and string-case helpers.

mod file;
pub mod logger;
mod naming;

// File operations
pub use file::{WriteMode, WriteOptions, WriteStatus, write_file};
// String utilities
pub use naming::{to_camel_case, to_pascal_case};
