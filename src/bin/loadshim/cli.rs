//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Loadshim - generates dynamic-loading shims from C headers
#[derive(Parser)]
#[command(name = "loadshim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Header file to scan for function declarations
    pub source: Option<PathBuf>,

    /// Path to write the generated shim to
    pub dest: Option<PathBuf>,

    /// Name of the generated loader function
    pub load_fn: Option<String>,

    /// Emit the extracted declarations as JSON (no shim written)
    #[arg(long)]
    pub plan: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
