//! In-line ranges for annotation keywords.
//!
//! Hint decorations mark the keyword token of each annotation line. Given
//! a node and its line's text, [`hint_range`] locates the keyword and
//! returns its byte range; [`nodes_by_file`] groups a graph's nodes (marks
//! included) per file so a host can decorate visible editors in one pass.

use crate::config::FlowConfig;
use crate::model::{Graph, Node, Role};
use rustc_hash::FxHashMap;
use std::path::Path;
use text_size::{TextRange, TextSize};

/// Byte index of the keyword occurrence in a line, tolerating both
/// `prefix-` and `prefix -` spellings.
pub fn prefix_index(line: &str, prefix: &str) -> Option<usize> {
    line.find(&format!("{prefix}-"))
        .or_else(|| line.find(&format!("{prefix} -")))
}

/// Byte range of the annotation keyword on a node's line, given that
/// line's text. Mark nodes use the mark keyword, everything else the flow
/// keyword.
pub fn hint_range(line: &str, role: &Role, config: &FlowConfig) -> Option<TextRange> {
    let keyword = if matches!(role, Role::Mark) {
        &config.mark_prefix
    } else {
        &config.prefix
    };
    let start = prefix_index(line, keyword)?;
    Some(TextRange::new(
        TextSize::new(start as u32),
        TextSize::new((start + keyword.len()) as u32),
    ))
}

/// Group every node in the graph (feature nodes and marks) by file.
pub fn nodes_by_file(graph: &Graph) -> FxHashMap<&Path, Vec<&Node>> {
    let mut map: FxHashMap<&Path, Vec<&Node>> = FxHashMap::default();
    for fg in graph.features.values() {
        for node in &fg.nodes {
            map.entry(node.file.as_path()).or_default().push(node);
        }
    }
    for mark in &graph.marks {
        map.entry(mark.file.as_path()).or_default().push(mark);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn test_prefix_index_variants() {
        assert_eq!(prefix_index("  // flow-Auth start", "flow"), Some(5));
        assert_eq!(prefix_index("// flow -Auth start", "flow"), Some(3));
        assert_eq!(prefix_index("// nothing here", "flow"), None);
    }

    #[test]
    fn test_hint_range_covers_keyword() {
        let config = FlowConfig::default();
        let range = hint_range("  // flow-Auth start", &Role::Start, &config).unwrap();
        assert_eq!(range, TextRange::new(TextSize::new(5), TextSize::new(9)));

        let range = hint_range("// mark-note", &Role::Mark, &config).unwrap();
        assert_eq!(range, TextRange::new(TextSize::new(3), TextSize::new(7)));
    }

    #[test]
    fn test_hint_range_missing_keyword() {
        let config = FlowConfig::default();
        assert!(hint_range("plain code", &Role::Start, &config).is_none());
    }

    #[test]
    fn test_nodes_by_file_includes_marks() {
        let graph = build_graph(vec![
            Node::new("F", Role::Start, "/a.ts", 1, None),
            Node::new("F", Role::End, "/b.ts", 2, None),
            Node::new("MARK", Role::Mark, "/a.ts", 3, None),
        ]);
        let map = nodes_by_file(&graph);
        assert_eq!(map[Path::new("/a.ts")].len(), 2);
        assert_eq!(map[Path::new("/b.ts")].len(), 1);
    }
}
