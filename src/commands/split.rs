//! Split command implementation.
//!
//! The split command:
//! 1. Reads the input trace
//! 2. Extracts event blocks
//! 3. Writes one leave-one-out variant file per requested index

use crate::output::{variant_path, write_variant};
use crate::parser::{extract_events, load_trace};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the split command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct SplitArgs {
    /// Number of leave-one-out variants to generate. Signed: a negative
    /// count makes the write loop run zero times, it is not an error.
    pub events: i64,

    /// Path to the input trace file
    pub tracefile: PathBuf,
}

/// Execute the split command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Split command arguments
///
/// # Returns
/// Ok if all requested variants were written, Err with context if any
/// step fails
///
/// # Errors
/// * Trace file read errors (nothing is written in that case, extraction
///   happens once before the write loop)
/// * Variant write errors (variants for earlier indices stay on disk)
///
/// # Example
/// ```ignore
/// let args = SplitArgs {
///     events: 10,
///     tracefile: PathBuf::from("trace.xml"),
/// };
///
/// execute_split(args)?;
/// ```
pub fn execute_split(args: SplitArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting split for trace: {}", args.tracefile.display());

    // Step 1: Read input trace
    info!("Step 1/3: Reading trace file...");
    let content = load_trace(&args.tracefile).context("Failed to read trace file")?;

    // Step 2: Extract event blocks
    info!("Step 2/3: Extracting event blocks...");
    let events = extract_events(&content);

    debug!("Trace holds {} event blocks", events.len());

    // Step 3: Write variants
    info!("Step 3/3: Writing {} variant files...", args.events.max(0));

    if args.events < 0 {
        debug!("Requested variant count is negative, nothing to write");
    }

    for index in 0..args.events {
        let output_path = variant_path(&args.tracefile, index as usize);

        write_variant(&events, index as usize, &output_path)
            .with_context(|| format!("Failed to write variant {}", index + 1))?;

        info!("✓ Variant written to: {}", output_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Split completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate split arguments
///
/// **Public** - can be called before execute_split for early validation
///
/// A negative or zero variant count is deliberately not rejected: the
/// write loop simply runs zero times. The trace file is not stat-ed here
/// either, read failures surface from the read itself.
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &SplitArgs) -> Result<()> {
    // Validate trace file path
    if args.tracefile.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    Ok(())
}
