//! Workspace scanning glue.
//!
//! File enumeration and size-capped reads live in [`file_loader`]; the
//! bulk scan reads and parses candidate files in parallel and folds the
//! results into one graph. A single unreadable or oversize file never
//! aborts a scan — it just contributes nothing.

pub mod file_loader;
mod scanner;

pub use file_loader::{FileLoadError, ScanError, collect_file_paths, load_file};
pub use scanner::{ScanOutcome, scan_files, scan_workspace};
