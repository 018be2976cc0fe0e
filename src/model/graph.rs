//! The flow graph: feature name → node collection, plus free-standing marks.

use super::{FeatureIssues, Node, Role};
use indexmap::IndexMap;
use smol_str::SmolStr;
use std::path::Path;

/// One flow: every node whose feature name equals the key, plus the
/// derived issue summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureGraph {
    pub feature: SmolStr,
    pub nodes: Vec<Node>,
    /// Derived cache; recomputed by the validator on every structural
    /// change, `None` only before the first validation pass.
    pub issues: Option<FeatureIssues>,
}

impl FeatureGraph {
    pub fn new(feature: impl Into<SmolStr>) -> Self {
        Self {
            feature: feature.into(),
            nodes: Vec::new(),
            issues: None,
        }
    }
}

/// The root owned object for a workspace's annotation state.
///
/// Feature entries keep insertion order, so tree consumers iterate
/// deterministically. Mark nodes are stored separately from features:
/// they carry a synthetic feature key but belong to no flow.
///
/// The graph is exclusively owned by whichever component holds the current
/// state (see [`GraphState`](crate::graph::GraphState)); all mutation goes
/// through the graph builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub features: IndexMap<SmolStr, FeatureGraph>,
    pub marks: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up one feature's graph.
    pub fn feature(&self, name: &str) -> Option<&FeatureGraph> {
        self.features.get(name)
    }

    /// Iterate feature names in insertion order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.marks.is_empty()
    }

    /// Total node count across features and marks.
    pub fn node_count(&self) -> usize {
        self.features.values().map(|f| f.nodes.len()).sum::<usize>() + self.marks.len()
    }

    /// Route one node into its feature entry (created on demand) or into
    /// the mark list.
    pub fn insert_node(&mut self, node: Node) {
        if matches!(node.role, Role::Mark) {
            self.marks.push(node);
            return;
        }
        self.features
            .entry(node.feature.clone())
            .or_insert_with(|| FeatureGraph::new(node.feature.clone()))
            .nodes
            .push(node);
    }

    /// Remove every node belonging to `file`, dropping feature entries
    /// that become empty.
    pub fn remove_file_nodes(&mut self, file: &Path) {
        self.features.retain(|_, fg| {
            fg.nodes.retain(|n| n.file.as_path() != file);
            !fg.nodes.is_empty()
        });
        self.marks.retain(|n| n.file.as_path() != file);
    }
}
