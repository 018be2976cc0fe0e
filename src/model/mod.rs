//! Data model: annotation nodes and the flow graph.
//!
//! A [`Node`] is one parsed comment line. Nodes sharing a feature name form
//! a [`FeatureGraph`]; the [`Graph`] maps feature names to their graphs and
//! keeps free-standing marks in a separate list. [`FeatureIssues`] is the
//! derived structural-consistency summary for one feature.
//!
//! Nodes are immutable after construction: a re-parse builds new node
//! objects, and files' node sets are always removed and reinserted as a
//! unit by the graph builder.

mod graph;
mod issues;
mod node;

pub use graph::{FeatureGraph, Graph};
pub use issues::{DuplicateOrder, FeatureIssues};
pub use node::{Meta, Node, Role};
