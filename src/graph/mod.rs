//! Graph construction and maintenance.
//!
//! The builder folds parsed nodes into the [`Graph`](crate::model::Graph)
//! and applies per-file incremental updates; the sorter produces the
//! deterministic, hierarchy-respecting node order within each feature; the
//! validator derives each feature's structural issues. [`GraphState`] is
//! the single owned slot holding the current graph.

mod builder;
mod sort;
mod state;
mod validate;

pub use builder::{build_graph, recompute_all_issues, update_graph_for_file};
pub use sort::{compare_nodes, compare_order, sort_feature_graph, sort_graph};
pub use state::GraphState;
pub use validate::compute_feature_issues;
