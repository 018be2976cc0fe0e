//! Completion suggestions for annotation lines.
//!
//! Suggestions fire only while the cursor sits in a `<style> <prefix>-…`
//! token. Feature names come first; title strings rank below them. The
//! host receives plain items and maps them onto its own completion API.

use crate::config::FlowConfig;
use crate::model::Graph;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Feature,
    Title,
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionItem {
    /// The text shown in the list, e.g. `flow-login`.
    pub label: String,
    pub kind: CompletionKind,
    /// Detail text (shown after the label).
    pub detail: Option<String>,
    /// Text to insert (if different from label).
    pub insert_text: Option<String>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Lowercase and strip everything but ASCII alphanumerics; the loose
/// matching form for ASCII queries.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn matches_query(candidate: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if query.chars().any(|c| !c.is_ascii()) {
        return candidate.to_lowercase().starts_with(&query.to_lowercase());
    }
    let norm = normalize(query);
    norm.is_empty() || normalize(candidate).starts_with(&norm)
}

/// The partially typed feature token, if the cursor prefix is inside an
/// annotation. `line_prefix` is the line text up to the cursor.
fn annotation_query<'a>(line_prefix: &'a str, config: &FlowConfig) -> Option<&'a str> {
    let trimmed = line_prefix.trim_start();
    let style = config
        .comment_styles
        .iter()
        .find(|s| trimmed.starts_with(s.as_str()))?;
    let after_style = trimmed[style.len()..].trim_start();
    let token = after_style.split_whitespace().next().unwrap_or(after_style);
    let head = token.get(..config.prefix.len())?;
    if !head.eq_ignore_ascii_case(&config.prefix) {
        return None;
    }
    let rest = &token[config.prefix.len()..];
    rest.strip_prefix('-')
}

/// Completion items for a cursor position.
///
/// `line_prefix` is the line text up to the cursor; suggestions are only
/// produced when it ends inside a `<style> <prefix>-…` token. Matching is
/// a normalized prefix match over feature names and title strings.
pub fn completions(graph: &Graph, line_prefix: &str, config: &FlowConfig) -> Vec<CompletionItem> {
    let Some(query) = annotation_query(line_prefix, config) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for feature in graph.feature_names() {
        if matches_query(feature, query) {
            items.push(
                CompletionItem::new(format!("{}-{feature}", config.prefix), CompletionKind::Feature)
                    .with_insert_text(feature)
                    .with_priority(10),
            );
        }
    }
    for fg in graph.features.values() {
        for node in &fg.nodes {
            if let Some(title) = node.title() {
                if matches_query(title, query) {
                    items.push(
                        CompletionItem::new(title, CompletionKind::Title)
                            .with_detail(format!("title in {}", fg.feature))
                            .with_priority(50),
                    );
                }
            }
        }
    }

    items.sort_by(|a, b| {
        a.sort_priority
            .cmp(&b.sort_priority)
            .then_with(|| a.label.cmp(&b.label))
    });
    items.dedup_by(|a, b| a.label == b.label);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::model::{Meta, Node, Role};
    use smol_str::SmolStr;

    fn sample_graph() -> Graph {
        let title_meta = Meta {
            title: Some(SmolStr::new("变量")),
            ..Meta::default()
        };
        build_graph(vec![
            Node::new("login", Role::Start, "/a.ts", 1, None),
            Node::new("login", Role::Title, "/a.ts", 2, Some(title_meta)),
            Node::new("logout", Role::Start, "/a.ts", 5, None),
            Node::new("支付", Role::Start, "/b.ts", 1, None),
        ])
    }

    #[test]
    fn test_fires_only_inside_annotation_token() {
        let graph = sample_graph();
        let config = FlowConfig::default();
        assert!(completions(&graph, "let x = flow-", &config).is_empty());
        assert!(completions(&graph, "// plain comment", &config).is_empty());
        assert!(!completions(&graph, "// flow-", &config).is_empty());
    }

    #[test]
    fn test_prefix_matches_features() {
        let graph = sample_graph();
        let config = FlowConfig::default();
        let items = completions(&graph, "// flow-log", &config);
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["flow-login", "flow-logout"]);
        assert_eq!(items[0].insert_text.as_deref(), Some("login"));
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let graph = sample_graph();
        let config = FlowConfig::default();
        let items = completions(&graph, "// flow-", &config);
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].kind, CompletionKind::Title);
    }

    #[test]
    fn test_non_ascii_query_matches_literally() {
        let graph = sample_graph();
        let config = FlowConfig::default();
        let items = completions(&graph, "// flow-支", &config);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "flow-支付");
    }

    #[test]
    fn test_titles_rank_below_features() {
        let graph = sample_graph();
        let config = FlowConfig::default();
        let items = completions(&graph, "// flow-", &config);
        assert!(items[0].sort_priority < items[items.len() - 1].sort_priority);
        let title = items.iter().find(|i| i.kind == CompletionKind::Title).unwrap();
        assert_eq!(title.label, "变量");
        assert_eq!(title.detail.as_deref(), Some("title in login"));
    }

    #[test]
    fn test_case_insensitive_keyword_gate() {
        let graph = sample_graph();
        let config = FlowConfig::default();
        assert!(!completions(&graph, "// FLOW-log", &config).is_empty());
    }
}
