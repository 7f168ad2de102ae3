//! High-level operations.
//!
//! This module contains the implementation of loadshim runs.

pub mod generate;

pub use generate::{generate_shim, scan_file, GenerateOptions, GenerateResult};
