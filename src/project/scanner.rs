//! Bulk workspace scan.
//!
//! Candidate files are read and parsed in parallel; the fold into the
//! graph runs on the calling thread afterwards, so no reader ever observes
//! a half-inserted feature entry.

use super::file_loader::{ScanError, collect_file_paths, load_file};
use crate::config::FlowConfig;
use crate::graph::build_graph;
use crate::index::{CacheEntry, IndexCache, PersistEntry, comment_hash, hash_text};
use crate::model::{Graph, Node};
use crate::parser::Grammar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Result of a bulk scan: the graph plus the per-file records to hand to
/// the persisted index.
#[derive(Debug)]
pub struct ScanOutcome {
    pub graph: Graph,
    pub entries: Vec<PersistEntry>,
}

/// Build a graph from already-read `(path, text)` pairs.
///
/// This is the bulk-input contract for callers that do their own file
/// enumeration; no I/O happens here. Zero pairs yield an empty graph.
pub fn scan_files<I>(files: I, config: &FlowConfig) -> Graph
where
    I: IntoIterator<Item = (PathBuf, String)>,
{
    let grammar = Grammar::new(config);
    build_graph(
        files
            .into_iter()
            .flat_map(|(path, text)| grammar.parse_text(&text, &path)),
    )
}

struct ScannedFile {
    path: PathBuf,
    file_hash: String,
    comment_hash: String,
    nodes: Vec<Node>,
}

/// Scan a workspace directory into a fresh graph.
///
/// Files that cannot be read, exceed the size cap, or contain no
/// annotations are skipped; the scan itself only fails if the root
/// directory is unusable. Hashes for every annotated file are recorded in
/// `cache` and returned as persist entries.
pub fn scan_workspace(
    root: &Path,
    config: &FlowConfig,
    cache: &mut IndexCache,
) -> Result<ScanOutcome, ScanError> {
    let paths = collect_file_paths(root, config)?;
    let grammar = Grammar::new(config);
    let candidates = prefilter_candidates(config);

    let scanned: Vec<ScannedFile> = paths
        .par_iter()
        .filter_map(|path| {
            let text = match load_file(path, config.max_file_size_kb) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(%err, "skipping file during scan");
                    return None;
                }
            };
            if !contains_candidate(&text, &candidates) {
                return None;
            }
            let nodes = grammar.parse_text(&text, path);
            if nodes.is_empty() {
                return None;
            }
            Some(ScannedFile {
                path: path.clone(),
                file_hash: hash_text(&text),
                comment_hash: comment_hash(&nodes),
                nodes,
            })
        })
        .collect();

    let mut entries = Vec::with_capacity(scanned.len());
    let mut all_nodes = Vec::new();
    for file in scanned {
        cache.set(
            file.path.clone(),
            CacheEntry {
                file_hash: file.file_hash.clone(),
                comment_hash: file.comment_hash.clone(),
            },
        );
        all_nodes.extend(file.nodes.iter().cloned());
        entries.push(PersistEntry {
            file: file.path,
            file_hash: file.file_hash,
            comment_hash: file.comment_hash,
            nodes: file.nodes,
        });
    }
    let graph = build_graph(all_nodes);
    tracing::debug!(
        files = entries.len(),
        features = graph.features.len(),
        marks = graph.marks.len(),
        "workspace scan complete"
    );
    Ok(ScanOutcome { graph, entries })
}

/// Substrings whose presence marks a file as worth line parsing: each
/// comment style paired with the flow and mark keywords, with and without
/// a separating space.
fn prefilter_candidates(config: &FlowConfig) -> Vec<String> {
    let mut candidates = Vec::new();
    for style in &config.comment_styles {
        for keyword in [&config.prefix, &config.mark_prefix] {
            candidates.push(format!("{style} {keyword}").to_lowercase());
            candidates.push(format!("{style}{keyword}").to_lowercase());
        }
    }
    candidates
}

fn contains_candidate(text: &str, candidates: &[String]) -> bool {
    let haystack = text.to_lowercase();
    candidates.iter().any(|c| haystack.contains(c.as_str()))
}
