//! Trace Split CLI
//!
//! Generates leave-one-out variants of an XML event trace.
//! Each variant file omits exactly one event block by position.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use trace_split::commands::{execute_split, validate_args, SplitArgs};

/// Trace Split - Leave-one-out variant generation for XML event traces
#[derive(Parser, Debug)]
#[command(name = "trace-split")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of leave-one-out variants to generate
    #[arg(long, allow_negative_numbers = true)]
    events: i64,

    /// Path to the input trace file
    #[arg(long)]
    tracefile: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Build splitter configuration
    let args = SplitArgs {
        events: cli.events,
        tracefile: cli.tracefile,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute split
    execute_split(args)?;

    Ok(())
}
