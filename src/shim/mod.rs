//! Shim generation for dynamically loaded C libraries.

pub mod generator;

pub use generator::ShimGenerator;
