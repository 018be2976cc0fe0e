//! Diagnostics derived from feature issues.
//!
//! Placement policy: duplicate step orders flag every offending step line;
//! a missing start/end is reported once, on a representative line of the
//! feature; a duplicated start/end flags every occurrence after the first.
//! Nothing is produced unless strict mode is on.

use crate::graph::compute_feature_issues;
use crate::model::{FeatureGraph, Graph, Node, Role};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One reportable problem, anchored to a file and 1-based line. Hosts
/// that want a precise range combine `line` with
/// [`hint_range`](crate::ide::hint_range) once they have the line's text.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: u32,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    fn warning(node: &Node, message: String) -> Self {
        Self {
            file: node.file.clone(),
            line: node.line,
            message,
            severity: Severity::Warning,
        }
    }
}

/// Compute diagnostics for the whole graph. Empty unless `strict`.
pub fn collect_diagnostics(graph: &Graph, strict: bool) -> Vec<Diagnostic> {
    if !strict {
        return Vec::new();
    }
    let mut diagnostics = Vec::new();
    for fg in graph.features.values() {
        collect_for_feature(fg, &mut diagnostics);
    }
    diagnostics
}

fn collect_for_feature(fg: &FeatureGraph, out: &mut Vec<Diagnostic>) {
    let issues = match &fg.issues {
        Some(issues) => issues.clone(),
        None => compute_feature_issues(fg),
    };

    for dup in &issues.duplicate_orders {
        for node in fg.nodes.iter().filter(|n| {
            n.role.is_step() && n.order().is_some_and(|o| o.to_string() == dup.order)
        }) {
            out.push(Diagnostic::warning(
                node,
                format!(
                    "duplicate step order {} ({} occurrences)",
                    dup.order, dup.count
                ),
            ));
        }
    }

    let starts: Vec<&Node> = fg.nodes.iter().filter(|n| n.role == Role::Start).collect();
    let ends: Vec<&Node> = fg.nodes.iter().filter(|n| n.role == Role::End).collect();

    if issues.missing_start {
        if starts.is_empty() {
            let representative = fg
                .nodes
                .iter()
                .find(|n| n.role.is_step())
                .or_else(|| fg.nodes.iter().find(|n| n.role == Role::End));
            if let Some(node) = representative {
                out.push(Diagnostic::warning(
                    node,
                    format!("{} is missing start", fg.feature),
                ));
            }
        } else {
            for node in &starts[1..] {
                out.push(Diagnostic::warning(
                    node,
                    format!("{} has a duplicate start", fg.feature),
                ));
            }
        }
    }

    if issues.missing_end {
        if ends.is_empty() {
            let representative = fg
                .nodes
                .iter()
                .find(|n| n.role.is_step())
                .or_else(|| fg.nodes.iter().find(|n| n.role == Role::Start));
            if let Some(node) = representative {
                out.push(Diagnostic::warning(
                    node,
                    format!("{} is missing end", fg.feature),
                ));
            }
        } else {
            for node in &ends[1..] {
                out.push(Diagnostic::warning(
                    node,
                    format!("{} has a duplicate end", fg.feature),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn node(feature: &str, role: Role, line: u32) -> Node {
        Node::new(feature, role, "/tmp/d.ts", line, None)
    }

    #[test]
    fn test_nothing_without_strict_mode() {
        let graph = build_graph(vec![node("F", Role::step_at(vec![1]), 2)]);
        assert!(collect_diagnostics(&graph, false).is_empty());
    }

    #[test]
    fn test_duplicate_orders_flag_every_step() {
        let graph = build_graph(vec![
            node("F", Role::Start, 1),
            node("F", Role::step_at(vec![1]), 2),
            node("F", Role::step_at(vec![1]), 3),
            node("F", Role::End, 9),
        ]);
        let diags = collect_diagnostics(&graph, true);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
        assert!(diags[0].message.contains("duplicate step order 1"));
        assert!(diags[0].message.contains("2 occurrences"));
    }

    #[test]
    fn test_missing_start_lands_on_representative_step() {
        let graph = build_graph(vec![
            node("F", Role::step_at(vec![1]), 4),
            node("F", Role::End, 9),
        ]);
        let diags = collect_diagnostics(&graph, true);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "F is missing start");
        assert_eq!(diags[0].line, 4);
    }

    #[test]
    fn test_duplicate_start_skips_the_first() {
        let graph = build_graph(vec![
            node("F", Role::Start, 1),
            node("F", Role::Start, 5),
            node("F", Role::End, 9),
        ]);
        let diags = collect_diagnostics(&graph, true);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "F has a duplicate start");
        assert_eq!(diags[0].line, 5);
    }

    #[test]
    fn test_missing_end_prefers_step_then_start() {
        let graph = build_graph(vec![node("F", Role::Start, 1)]);
        let diags = collect_diagnostics(&graph, true);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "F is missing end");
        assert_eq!(diags[0].line, 1);
    }

    #[test]
    fn test_clean_graph_is_quiet() {
        let graph = build_graph(vec![
            node("F", Role::Start, 1),
            node("F", Role::step_at(vec![1]), 2),
            node("F", Role::End, 3),
        ]);
        assert!(collect_diagnostics(&graph, true).is_empty());
    }
}
