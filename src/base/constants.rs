//! Domain constants shared across the crate.

/// Default annotation keyword: lines look like `// flow-<feature> …`.
pub const DEFAULT_PREFIX: &str = "flow";

/// Default keyword for free-standing marks: `// mark-<desc>`.
pub const DEFAULT_MARK_PREFIX: &str = "mark";

/// Default comment opener tokens accepted at line start.
pub const DEFAULT_COMMENT_STYLES: &[&str] = &["//"];

/// Synthetic feature key carried by mark nodes; marks are stored on
/// [`Graph::marks`](crate::model::Graph) rather than under a feature entry.
pub const MARK_FEATURE: &str = "MARK";

/// Directory names excluded from workspace scans.
pub const DEFAULT_IGNORE_PATHS: &[&str] = &["node_modules", "dist", ".git", "target"];

/// File extensions considered annotation candidates during a scan.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] =
    &["ts", "tsx", "js", "jsx", "java", "kt", "go", "py", "rs"];

/// Files larger than this are skipped by the scanner.
pub const DEFAULT_MAX_FILE_SIZE_KB: u64 = 1024;
