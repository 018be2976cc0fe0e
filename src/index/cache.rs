//! Content hashing and the in-memory per-file cache.

use crate::model::Node;
use rustc_hash::FxHashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// SHA-256 hex digest of raw bytes.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// SHA-256 hex digest of a text.
pub fn hash_text(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

/// Comment-level payload of one node: the fields that matter for change
/// detection, excluding file path and line number.
#[derive(Serialize)]
struct HashedNode<'a> {
    f: &'a str,
    r: &'a str,
    o: String,
    d: &'a str,
    t: String,
}

/// Hash of a file's annotations at the comment level.
///
/// Invariant under line-number shifts and file renames: only the feature,
/// role, order path, description, and tags of each node feed the digest.
pub fn comment_hash(nodes: &[Node]) -> String {
    let payload: Vec<HashedNode<'_>> = nodes
        .iter()
        .map(|n| HashedNode {
            f: &n.feature,
            r: n.role.name(),
            o: n.order().map(|o| o.to_string()).unwrap_or_default(),
            d: n.desc().unwrap_or(""),
            t: n.meta
                .as_ref()
                .map(|m| m.tags.join(","))
                .unwrap_or_default(),
        })
        .collect();
    let json = serde_json::to_string(&payload).expect("hash payload serializes");
    hash_text(&json)
}

/// The two hashes tracked per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub file_hash: String,
    pub comment_hash: String,
}

/// In-memory file → hashes map used to skip no-op updates.
#[derive(Debug, Default)]
pub struct IndexCache {
    store: FxHashMap<PathBuf, CacheEntry>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file: &Path) -> Option<&CacheEntry> {
        self.store.get(file)
    }

    pub fn set(&mut self, file: PathBuf, entry: CacheEntry) {
        self.store.insert(file, entry);
    }

    pub fn remove(&mut self, file: &Path) {
        self.store.remove(file);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
