//! FlowHost — unified state management for editor-event driven updates.
//!
//! `FlowHost` owns the graph state and the index cache and maps the host
//! editor's document events (change/save/open, rename, delete) onto graph
//! operations. Updates whose comment-level hash is unchanged are skipped,
//! so code-only edits that merely shift annotations around do not churn
//! the graph or the persisted index.

use crate::config::FlowConfig;
use crate::graph::GraphState;
use crate::index::{CacheEntry, IndexCache, PersistEntry, comment_hash, hash_text};
use crate::model::Graph;
use crate::parser::Grammar;
use std::path::Path;

/// Outcome of one file update.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpdate {
    /// Whether the file's annotations changed at the comment level.
    pub changed: bool,
    /// The record to upsert into the persisted index, when `changed`.
    pub entry: Option<PersistEntry>,
}

impl FileUpdate {
    fn unchanged() -> Self {
        Self {
            changed: false,
            entry: None,
        }
    }
}

/// Owns the current graph and the per-file hash cache.
#[derive(Debug, Default)]
pub struct FlowHost {
    state: GraphState,
    cache: IndexCache,
}

impl FlowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current graph.
    pub fn graph(&self) -> &Graph {
        self.state.get()
    }

    /// Replace the graph after a bulk rebuild.
    pub fn set_graph(&mut self, graph: Graph) {
        self.state.set(graph);
    }

    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut IndexCache {
        &mut self.cache
    }

    /// Re-parse one file's text and fold the result into the graph.
    ///
    /// If the comment-level hash matches the cached one, the graph is left
    /// untouched and the update reports `changed: false`.
    pub fn update_file(&mut self, file: &Path, text: &str, config: &FlowConfig) -> FileUpdate {
        let grammar = Grammar::new(config);
        let nodes = grammar.parse_text(text, file);
        let new_comment_hash = comment_hash(&nodes);

        if let Some(cached) = self.cache.get(file) {
            if cached.comment_hash == new_comment_hash {
                tracing::debug!(file = %file.display(), "no comment-level change, skipping update");
                return FileUpdate::unchanged();
            }
        }

        let file_hash = hash_text(text);
        self.cache.set(
            file.to_path_buf(),
            CacheEntry {
                file_hash: file_hash.clone(),
                comment_hash: new_comment_hash.clone(),
            },
        );
        let entry = PersistEntry {
            file: file.to_path_buf(),
            file_hash,
            comment_hash: new_comment_hash,
            nodes: nodes.clone(),
        };
        self.state.apply_file_update(file, nodes);
        FileUpdate {
            changed: true,
            entry: Some(entry),
        }
    }

    /// Drop a deleted file's nodes and cache entry.
    pub fn remove_file(&mut self, file: &Path) {
        self.cache.remove(file);
        self.state.apply_file_update(file, Vec::new());
    }

    /// Move a file's annotations from its old path to its new one.
    pub fn rename_file(
        &mut self,
        old: &Path,
        new: &Path,
        text: &str,
        config: &FlowConfig,
    ) -> FileUpdate {
        self.remove_file(old);
        self.update_file(new, text, config)
    }
}
