//! Event block extraction from raw trace text.
//!
//! The trace is scanned textually: each `<event ...>...</event>` block is
//! captured verbatim, trailing newline included, in appearance order.
//! This is deliberately not a structural XML parse, so nested or malformed
//! event tags split at the first closing tag.

use crate::utils::config::EVENT_BLOCK_PATTERN;
use crate::utils::error::TraceError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static EVENT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EVENT_BLOCK_PATTERN).unwrap());

/// Read the entire trace file into memory
///
/// **Public** - first pipeline step, called from execute_split
///
/// # Arguments
/// * `trace_path` - Path to the input trace file
///
/// # Returns
/// Full file content as a string
///
/// # Errors
/// * `TraceError::ReadFailed` - file missing or unreadable
pub fn load_trace(trace_path: impl AsRef<Path>) -> Result<String, TraceError> {
    let trace_path = trace_path.as_ref();

    debug!("Reading trace file: {}", trace_path.display());

    let content = std::fs::read_to_string(trace_path)?;

    debug!("Read {} bytes", content.len());

    Ok(content)
}

/// Extract all event blocks from trace content
///
/// **Public** - main extraction entry point
///
/// Matching is non-greedy, so consecutive blocks separate at each
/// `</event>` boundary. Content outside the blocks (headers, wrapping
/// root elements) is ignored and never reproduced in output.
///
/// # Arguments
/// * `content` - Raw trace text
///
/// # Returns
/// Event blocks in appearance order; the sequence is never re-sorted
pub fn extract_events(content: &str) -> Vec<String> {
    let events: Vec<String> = EVENT_BLOCK_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();

    debug!("Extracted {} event blocks", events.len());

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_extract_events_in_order() {
        let trace = "<event name=\"a\">x</event>\n<event>b</event>\n<event>c</event>\n";
        let events = extract_events(trace);

        assert_eq!(events.len(), 3);
        assert_eq!(events[0], "<event name=\"a\">x</event>\n");
        assert_eq!(events[1], "<event>b</event>\n");
        assert_eq!(events[2], "<event>c</event>\n");
    }

    #[test]
    fn test_extract_events_multiline_body() {
        let trace = "<event timestamp=\"1\">\n  <field name=\"cpu\" value=\"0\"/>\n</event>\n";
        let events = extract_events(trace);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0], trace);
    }

    #[test]
    fn test_extract_events_non_greedy_split() {
        // Two adjacent blocks must not merge into one greedy match
        let trace = "<event>first</event>\n<event>second</event>\n";
        let events = extract_events(trace);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], "<event>first</event>\n");
        assert_eq!(events[1], "<event>second</event>\n");
    }

    #[test]
    fn test_extract_events_ignores_surrounding_content() {
        let trace = "<?xml version=\"1.0\"?>\n<trace>\n<event>a</event>\n</trace>\n";
        let events = extract_events(trace);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0], "<event>a</event>\n");
    }

    #[test]
    fn test_extract_events_requires_trailing_newline() {
        // A closing tag at end-of-file without a newline is not a block
        let trace = "<event>a</event>\n<event>b</event>";
        let events = extract_events(trace);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0], "<event>a</event>\n");
    }

    #[test]
    fn test_extract_events_empty_content() {
        let events = extract_events("");
        assert!(events.is_empty());
    }

    #[test]
    fn test_extract_events_no_blocks() {
        let events = extract_events("<trace>\n<other>x</other>\n</trace>\n");
        assert!(events.is_empty());
    }

    #[test]
    fn test_load_trace_reads_content() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "<event>a</event>\n").unwrap();

        let content = load_trace(temp_file.path()).unwrap();
        assert_eq!(content, "<event>a</event>\n");
    }

    #[test]
    fn test_load_trace_missing_file() {
        let result = load_trace("/nonexistent/trace.xml");
        assert!(matches!(result, Err(TraceError::ReadFailed(_))));
    }
}
