//! Comment-line grammar for flow annotations.
//!
//! One line of text yields at most one [`Node`](crate::model::Node). Four
//! rules are tried in fixed priority order until one matches:
//!
//! ```text
//! 1. title     // flow-<feature>-<title> <desc…>
//! 2. ordered   // flow-<feature> (start|end|1.2.3) <desc…>
//! 3. no-order  // flow-<feature> <desc…>
//! 4. mark      // mark(-<desc>)?
//! ```
//!
//! The parser is total: no input makes it panic or return an error. A line
//! matching no rule is simply not an annotation.

mod grammar;

pub use grammar::{Grammar, parse_order};

use crate::config::FlowConfig;
use crate::model::Node;
use std::path::Path;

/// Parse one line with a fresh [`Grammar`] for `config`.
///
/// Convenience for one-off calls; bulk callers should build the `Grammar`
/// once and reuse it.
pub fn parse_line(line: &str, file: &Path, line_number: u32, config: &FlowConfig) -> Option<Node> {
    Grammar::new(config).parse_line(line, file, line_number)
}

/// Parse a whole text blob with a fresh [`Grammar`] for `config`.
pub fn parse_text(text: &str, file: &Path, config: &FlowConfig) -> Vec<Node> {
    Grammar::new(config).parse_text(text, file)
}
