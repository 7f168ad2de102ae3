//! Implementation of the end-to-end shim generation run.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::header::{scan_header, FunctionDecl};
use crate::shim::ShimGenerator;
use crate::util::fs;

/// Options for a shim generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Header to scan
    pub source: PathBuf,

    /// Path to write the generated shim to
    pub dest: PathBuf,

    /// Name of the generated loader function
    pub load_fn: String,
}

/// What a generation run extracted.
#[derive(Debug)]
pub struct GenerateResult {
    /// Declarations accepted from the source header, in source order
    pub decls: Vec<FunctionDecl>,
}

/// Read a header file and extract its function declarations.
pub fn scan_file(path: &Path) -> Result<Vec<FunctionDecl>> {
    let source = fs::read_to_string(path)?;
    let decls = scan_header(&source);

    tracing::debug!(
        source = %path.display(),
        declarations = decls.len(),
        "scanned header"
    );
    for decl in &decls {
        tracing::trace!(%decl, "accepted declaration");
    }

    Ok(decls)
}

/// Scan `source` and write the dynamic-loading shim to `dest`.
pub fn generate_shim(opts: &GenerateOptions) -> Result<GenerateResult> {
    let decls = scan_file(&opts.source)?;
    ShimGenerator::new(&opts.load_fn).generate_to_file(&decls, &opts.dest)?;
    Ok(GenerateResult { decls })
}
