//! Trace loading and event block extraction.
//!
//! This module handles:
//! - Reading the input trace file
//! - Extracting `<event>...</event>` blocks in appearance order

pub mod event_trace;

// Re-export main functions
pub use event_trace::{extract_events, load_trace};
