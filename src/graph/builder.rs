//! Folding parsed nodes into the graph and applying per-file updates.

use super::sort::sort_graph;
use super::validate::compute_feature_issues;
use crate::model::{Graph, Node};
use std::path::Path;

/// Refresh every feature's derived issue summary.
///
/// Conservative whole-graph recomputation; every builder operation calls
/// this before returning so a stale issues cache never outlives a single
/// mutation.
pub fn recompute_all_issues(graph: &mut Graph) {
    for fg in graph.features.values_mut() {
        fg.issues = Some(compute_feature_issues(fg));
    }
}

/// Build a graph from scratch out of parsed nodes.
///
/// Feature entries are created on demand, mark nodes go to the mark list,
/// then issues are computed and each feature's nodes are sorted. An empty
/// input yields an empty graph.
pub fn build_graph<I>(nodes: I) -> Graph
where
    I: IntoIterator<Item = Node>,
{
    let mut graph = Graph::new();
    for node in nodes {
        graph.insert_node(node);
    }
    recompute_all_issues(&mut graph);
    sort_graph(&mut graph);
    graph
}

/// Apply one file's freshly parsed node list to an existing graph.
///
/// Every node belonging to `file` is removed first (feature entries that
/// become empty are dropped), the new nodes are inserted, and the graph is
/// revalidated and re-sorted. The canonical "apply an edit" primitive:
/// calling it twice with the same `(file, nodes)` leaves the graph
/// identical to calling it once.
pub fn update_graph_for_file(graph: &mut Graph, file: &Path, nodes: Vec<Node>) {
    graph.remove_file_nodes(file);
    for node in nodes {
        graph.insert_node(node);
    }
    recompute_all_issues(graph);
    sort_graph(graph);
}
