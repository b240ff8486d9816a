//! Trace Split
//!
//! Leave-one-out variant generation for XML event traces.
//!
//! Given a trace file containing a sequence of `<event>...</event>`
//! records, this crate produces N new trace files, each omitting exactly
//! one event by position. The variants are used to evaluate how an
//! analysis reacts to a single missing event.
//!
//! This crate provides the implementation for the `trace-split` CLI tool.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
