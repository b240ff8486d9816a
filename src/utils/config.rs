//! Configuration and constants for the CLI.

// Pattern for one event block: opening tag through the first closing tag
// plus its trailing newline. Dot-all and non-greedy, so adjacent blocks
// split at each </event> boundary rather than merging into one match.
pub const EVENT_BLOCK_PATTERN: &str = r"(?s)<event.*?</event>\n";

/// Extension given to every generated variant file
pub const VARIANT_EXTENSION: &str = "xml";
