//! The persisted JSON index.
//!
//! One record per annotated file: its hashes plus the parsed nodes, so a
//! cold start can serve tree and completion data before the first full
//! scan finishes. The index is advisory — a missing or corrupt file loads
//! as empty and the next scan rewrites it.

use crate::model::Node;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One persisted record, keyed by file path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistEntry {
    pub file: PathBuf,
    pub file_hash: String,
    pub comment_hash: String,
    pub nodes: Vec<Node>,
}

/// Errors writing the persisted index.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save handle for one index file.
#[derive(Debug, Clone)]
pub struct PersistentIndex {
    path: PathBuf,
}

impl PersistentIndex {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all entries. A missing or unreadable index, or one that fails
    /// to parse, yields an empty list.
    pub fn load(&self) -> Vec<PersistEntry> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "discarding unreadable index");
                Vec::new()
            }
        }
    }

    /// Write all entries, creating the parent directory if needed.
    pub fn save(&self, entries: &[PersistEntry]) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_vec(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Insert or replace the record for one file.
    pub fn upsert(&self, entry: PersistEntry) -> Result<(), PersistError> {
        let mut entries = self.load();
        match entries.iter_mut().find(|e| e.file == entry.file) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        self.save(&entries)
    }

    /// Drop the records for the given files.
    pub fn remove(&self, files: &[PathBuf]) -> Result<(), PersistError> {
        let mut entries = self.load();
        entries.retain(|e| !files.contains(&e.file));
        self.save(&entries)
    }

    /// Bring the index in line with a fresh scan: upsert entries whose
    /// comment hash changed, keep unchanged ones, and drop records for
    /// files the scan no longer saw.
    pub fn reconcile(&self, entries: &[PersistEntry]) -> Result<(), PersistError> {
        let previous: FxHashMap<PathBuf, PersistEntry> = self
            .load()
            .into_iter()
            .map(|e| (e.file.clone(), e))
            .collect();
        let mut merged = Vec::with_capacity(entries.len());
        for entry in entries {
            match previous.get(&entry.file) {
                Some(old) if old.comment_hash == entry.comment_hash => {
                    merged.push(old.clone());
                }
                _ => merged.push(entry.clone()),
            }
        }
        self.save(&merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{comment_hash, hash_text};
    use crate::model::Role;

    fn entry(file: &str, text: &str, nodes: Vec<Node>) -> PersistEntry {
        PersistEntry {
            file: PathBuf::from(file),
            file_hash: hash_text(text),
            comment_hash: comment_hash(&nodes),
            nodes,
        }
    }

    #[test]
    fn test_load_missing_index_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = PersistentIndex::new(dir.path().join("missing.json"));
        assert!(index.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_index_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(PersistentIndex::new(path).load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let index = PersistentIndex::new(dir.path().join(".flow/index.json"));
        let nodes = vec![Node::new("F", Role::Start, "/a.ts", 1, None)];
        index.save(&[entry("/a.ts", "body", nodes.clone())]).unwrap();

        let loaded = index.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].nodes, nodes);
    }

    #[test]
    fn test_upsert_replaces_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let index = PersistentIndex::new(dir.path().join("index.json"));
        index.upsert(entry("/a.ts", "v1", Vec::new())).unwrap();
        index.upsert(entry("/b.ts", "v1", Vec::new())).unwrap();
        index.upsert(entry("/a.ts", "v2", Vec::new())).unwrap();

        let loaded = index.load();
        assert_eq!(loaded.len(), 2);
        let a = loaded.iter().find(|e| e.file == Path::new("/a.ts")).unwrap();
        assert_eq!(a.file_hash, hash_text("v2"));
    }

    #[test]
    fn test_remove_drops_entries() {
        let dir = tempfile::tempdir().unwrap();
        let index = PersistentIndex::new(dir.path().join("index.json"));
        index.upsert(entry("/a.ts", "v1", Vec::new())).unwrap();
        index.upsert(entry("/b.ts", "v1", Vec::new())).unwrap();

        index.remove(&[PathBuf::from("/a.ts")]).unwrap();
        let loaded = index.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].file, PathBuf::from("/b.ts"));
    }

    #[test]
    fn test_reconcile_drops_vanished_files() {
        let dir = tempfile::tempdir().unwrap();
        let index = PersistentIndex::new(dir.path().join("index.json"));
        index.upsert(entry("/gone.ts", "v1", Vec::new())).unwrap();
        index.upsert(entry("/kept.ts", "v1", Vec::new())).unwrap();

        index.reconcile(&[entry("/kept.ts", "v1", Vec::new())]).unwrap();
        let loaded = index.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].file, PathBuf::from("/kept.ts"));
    }
}
