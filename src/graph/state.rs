//! The single owned slot holding the current graph.
//!
//! Multiple asynchronous triggers (file events, bulk scans, manual
//! refreshes) all funnel through one `GraphState`, injected into each
//! consumer instead of living as ambient global state. Mutation requires
//! `&mut self`, so the single-writer contract is enforced by the borrow
//! checker rather than by convention; there is nothing to lock because
//! there is never a second writer.

use super::builder::update_graph_for_file;
use crate::model::{Graph, Node};
use std::path::Path;

#[derive(Debug, Default)]
pub struct GraphState {
    graph: Graph,
}

impl GraphState {
    /// An empty state, as at process start before any scan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current graph.
    pub fn get(&self) -> &Graph {
        &self.graph
    }

    /// Replace the current graph wholesale (after a bulk rebuild).
    pub fn set(&mut self, graph: Graph) {
        self.graph = graph;
    }

    /// Apply one file's freshly parsed nodes to the current graph.
    pub fn apply_file_update(&mut self, file: &Path, nodes: Vec<Node>) {
        update_graph_for_file(&mut self.graph, file, nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::model::Role;

    #[test]
    fn test_starts_empty_and_replaces_wholesale() {
        let mut state = GraphState::new();
        assert!(state.get().is_empty());

        let graph = build_graph(vec![Node::new("F", Role::Start, "/a.ts", 1, None)]);
        state.set(graph);
        assert_eq!(state.get().features.len(), 1);
    }

    #[test]
    fn test_apply_file_update_flows_through_builder() {
        let mut state = GraphState::new();
        state.apply_file_update(
            Path::new("/a.ts"),
            vec![Node::new("F", Role::Start, "/a.ts", 1, None)],
        );
        assert!(state.get().feature("F").is_some());

        state.apply_file_update(Path::new("/a.ts"), Vec::new());
        assert!(state.get().is_empty());
    }
}
