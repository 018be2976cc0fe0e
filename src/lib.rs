//! # flownav-base
//!
//! Core library for flow comment annotations: parsing, graph modeling, and
//! consistency analysis.
//!
//! A "flow" is a named feature whose execution steps are annotated directly
//! in source comments (`// flow-Auth start`, `// flow-Auth 1.2 validate`,
//! `// flow-Auth end`). This crate turns those comments into a navigable
//! graph: it parses annotation lines, folds them into per-feature node
//! collections, keeps the graph consistent as files change, and derives
//! structural issues (missing or duplicated start/end markers, duplicated
//! step orders) for diagnostics.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → read-side data assembly (completion, highlight, diagnostics)
//!   ↓
//! project   → workspace scanning glue (file enumeration, bulk scan)
//!   ↓
//! index     → content hashes, in-memory cache, persisted JSON index
//!   ↓
//! graph     → builder/merger, sorting, validation, owned graph state
//!   ↓
//! parser    → comment-line grammar (title / ordered / no-order / mark)
//!   ↓
//! model     → Node, Role, FeatureGraph, Graph, FeatureIssues
//!   ↓
//! config    → caller-supplied configuration values
//!   ↓
//! base      → primitives (order paths, domain constants)
//! ```

/// Foundation types: order paths, domain constants
pub mod base;

/// Caller-supplied configuration values
pub mod config;

/// Data model: annotation nodes, feature graphs, derived issues
pub mod model;

/// Comment-line grammar: four rules tried in fixed priority order
pub mod parser;

/// Graph construction, sorting, validation, and the owned state slot
pub mod graph;

/// Content hashes and the persisted index
pub mod index;

/// Workspace scanning glue: file enumeration and bulk scan
pub mod project;

/// Read-side data assembly: completion, highlight ranges, diagnostics
pub mod ide;

// Re-export commonly needed items
pub use base::OrderPath;
pub use config::FlowConfig;
pub use graph::{GraphState, build_graph, update_graph_for_file};
pub use ide::{FileUpdate, FlowHost};
pub use model::{FeatureGraph, FeatureIssues, Graph, Meta, Node, Role};
pub use parser::{Grammar, parse_line, parse_order, parse_text};
pub use project::{ScanOutcome, scan_files, scan_workspace};
