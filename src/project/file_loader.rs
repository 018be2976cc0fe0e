//! File enumeration and size-capped reads.

use crate::config::FlowConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a whole scan. Per-file problems are not among them.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("workspace root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading one candidate file; the scanner logs and skips these.
#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is {size_kb} KiB, over the {max_kb} KiB scan limit")]
    TooLarge {
        path: PathBuf,
        size_kb: u64,
        max_kb: u64,
    },
}

/// Collect every candidate file under `root`, honoring the configured
/// ignore directories and include extensions. The result is sorted so
/// scans are deterministic.
pub fn collect_file_paths(root: &Path, config: &FlowConfig) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    let mut paths = Vec::new();
    collect_recursive(root, config, &mut paths, true)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive(
    dir: &Path,
    config: &FlowConfig,
    results: &mut Vec<PathBuf>,
    is_root: bool,
) -> Result<(), ScanError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) if is_root => {
            return Err(ScanError::ReadDir {
                path: dir.to_path_buf(),
                source,
            });
        }
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "skipping unreadable directory");
            return Ok(());
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            let ignored = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| config.ignore_paths.iter().any(|p| p == name));
            if !ignored {
                collect_recursive(&path, config, results, false)?;
            }
        } else if path.is_file() {
            let included = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| config.include_extensions.iter().any(|i| i == ext));
            if included {
                results.push(path);
            }
        }
    }
    Ok(())
}

/// Read one file as UTF-8, refusing files over the size cap.
pub fn load_file(path: &Path, max_kb: u64) -> Result<String, FileLoadError> {
    let metadata = std::fs::metadata(path).map_err(|source| FileLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let size_kb = metadata.len().div_ceil(1024);
    if size_kb > max_kb {
        return Err(FileLoadError::TooLarge {
            path: path.to_path_buf(),
            size_kb,
            max_kb,
        });
    }
    std::fs::read_to_string(path).map_err(|source| FileLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
