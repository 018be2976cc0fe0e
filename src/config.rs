//! Configuration values consumed by the parsing and scanning entry points.
//!
//! The core never caches configuration: callers hand a [`FlowConfig`] to
//! every parse/scan call, so a host that reloads its settings mid-session
//! only has to pass the fresh values on the next call.

use crate::base::constants::{
    DEFAULT_COMMENT_STYLES, DEFAULT_IGNORE_PATHS, DEFAULT_INCLUDE_EXTENSIONS,
    DEFAULT_MARK_PREFIX, DEFAULT_MAX_FILE_SIZE_KB, DEFAULT_PREFIX,
};

/// Caller-supplied configuration for parsing and scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    /// Annotation keyword (`flow` in `// flow-Auth start`).
    pub prefix: String,
    /// Keyword for free-standing marks (`mark` in `// mark-note`).
    pub mark_prefix: String,
    /// Comment opener tokens accepted at line start, tried in order.
    pub comment_styles: Vec<String>,
    /// When false, consistency issues are computed but not surfaced as
    /// diagnostics.
    pub strict_mode: bool,
    /// File extensions considered during a workspace scan.
    pub include_extensions: Vec<String>,
    /// Directory names excluded from a workspace scan.
    pub ignore_paths: Vec<String>,
    /// Files larger than this many KiB are skipped by the scanner.
    pub max_file_size_kb: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            mark_prefix: DEFAULT_MARK_PREFIX.to_string(),
            comment_styles: DEFAULT_COMMENT_STYLES.iter().map(|s| s.to_string()).collect(),
            strict_mode: false,
            include_extensions: DEFAULT_INCLUDE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignore_paths: DEFAULT_IGNORE_PATHS.iter().map(|s| s.to_string()).collect(),
            max_file_size_kb: DEFAULT_MAX_FILE_SIZE_KB,
        }
    }
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annotation keyword.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the mark keyword.
    pub fn with_mark_prefix(mut self, mark_prefix: impl Into<String>) -> Self {
        self.mark_prefix = mark_prefix.into();
        self
    }

    /// Replace the accepted comment opener tokens.
    pub fn with_comment_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable strict mode.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }
}
