//! C header analysis.
//!
//! Turns raw header text into function declarations: comments are stripped,
//! the text is split into candidate statements, and each candidate runs
//! through a heuristic signature extractor. There is no real C parser here;
//! every stage is a single pass over plain text.

pub mod extract;
pub mod scan;
pub mod strip;
pub mod types;

pub use extract::extract_signature;
pub use scan::{scan_header, split_statements};
pub use strip::strip_comments;
pub use types::FunctionDecl;
