//! Loadshim CLI - generates dynamic-loading shims from C headers

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

use loadshim::ops::{generate_shim, scan_file, GenerateOptions};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging. Stdout carries only usage text and --plan JSON, so
    // everything else goes to stderr.
    let filter = if cli.verbose {
        EnvFilter::new("loadshim=debug")
    } else {
        EnvFilter::new("loadshim=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // A run needs all three positionals; anything less prints usage and
    // exits cleanly.
    let (source, dest, load_fn) = match (cli.source, cli.dest, cli.load_fn) {
        (Some(source), Some(dest), Some(load_fn)) => (source, dest, load_fn),
        _ => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    if cli.plan {
        let decls = scan_file(&source)?;
        println!("{}", serde_json::to_string_pretty(&decls)?);
        return Ok(());
    }

    generate_shim(&GenerateOptions {
        source,
        dest,
        load_fn,
    })?;

    Ok(())
}
