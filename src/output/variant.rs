//! Leave-one-out variant writer.
//!
//! Each variant file is a plain concatenation of the surviving event
//! blocks, with no wrapping element and no XML declaration, written next
//! to the input trace.

use crate::utils::config::VARIANT_EXTENSION;
use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Compute the output path for one variant
///
/// **Public** - used by execute_split to name each output file
///
/// Strips the input path's final extension and appends `_<index+1>.xml`,
/// so variants land in the same directory as the input. A multi-dot name
/// loses only its last extension component.
///
/// # Arguments
/// * `trace_path` - Path to the input trace file
/// * `index` - Zero-based variant index (file names are one-based)
pub fn variant_path(trace_path: &Path, index: usize) -> PathBuf {
    let stem = trace_path.with_extension("");

    PathBuf::from(format!(
        "{}_{}.{}",
        stem.display(),
        index + 1,
        VARIANT_EXTENSION
    ))
}

/// Write one leave-one-out variant
///
/// **Public** - main entry point for variant output
///
/// Walks the event sequence with a running position counter and writes
/// every block whose position differs from `omit_index`; an out-of-range
/// `omit_index` therefore produces a full copy. An existing file at
/// `output_path` is truncated without warning.
///
/// # Arguments
/// * `events` - Extracted event blocks, in appearance order
/// * `omit_index` - Position of the block to leave out
/// * `output_path` - Path to the variant file
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, or path is a directory
/// * `OutputError::WriteFailed` - I/O error during create, write, or flush
pub fn write_variant(
    events: &[String],
    omit_index: usize,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing variant to: {}", output_path.display());

    validate_variant_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    let mut writer = BufWriter::new(file);

    let mut position = 0usize;
    let mut written = 0usize;
    for event in events {
        if position != omit_index {
            writer
                .write_all(event.as_bytes())
                .map_err(OutputError::WriteFailed)?;
            written += 1;
        }
        position += 1;
    }

    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("Variant holds {} of {} event blocks", written, events.len());

    Ok(())
}

/// Validate output path for a variant
///
/// **Private** - internal validation
///
/// Parent directories are never created: variants always land next to an
/// existing input file, so a missing directory is an error.
fn validate_variant_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
