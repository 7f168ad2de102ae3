//! Loadshim - generates dynamic-loading shims from C headers
//!
//! This crate provides the core library functionality for loadshim:
//! stripping comments from header text, extracting function declarations,
//! and rendering the typedef/pointer/macro/loader shim around them.

pub mod header;
pub mod ops;
pub mod shim;
pub mod util;

pub use header::{scan_header, FunctionDecl};
pub use shim::ShimGenerator;
