//! The four annotation rules, compiled for one configuration.

use crate::base::OrderPath;
use crate::base::constants::{DEFAULT_COMMENT_STYLES, MARK_FEATURE};
use crate::config::FlowConfig;
use crate::model::{Meta, Node, Role};
use regex::Regex;
use smol_str::SmolStr;
use std::path::Path;

/// Parse a dotted order token into its integer levels.
///
/// Each `.`-separated segment parses numerically, so leading zeros are
/// stripped (`"001.02"` ⇒ `[1, 2]`); segments that fail to parse are
/// dropped. A token with no valid segment yields `None`.
pub fn parse_order(raw: &str) -> Option<OrderPath> {
    let levels: Vec<u64> = raw.split('.').filter_map(|s| s.parse().ok()).collect();
    if levels.is_empty() {
        None
    } else {
        Some(OrderPath::new(levels))
    }
}

/// The annotation grammar compiled for one `(prefix, mark_prefix, styles)`
/// configuration.
///
/// Rules are tried per line in fixed priority order: title, then ordered
/// (`start`/`end`/dotted path), then the no-order fallback, then mark.
/// Matching is case-insensitive on the keyword tokens and case-preserving
/// on feature names and descriptions; whitespace between the opener, the
/// keyword, and subsequent tokens is arbitrary.
#[derive(Debug)]
pub struct Grammar {
    title: Regex,
    ordered: Regex,
    no_order: Regex,
    mark: Regex,
}

impl Grammar {
    pub fn new(config: &FlowConfig) -> Self {
        Self::from_parts(&config.prefix, &config.mark_prefix, &config.comment_styles)
    }

    pub fn from_parts(prefix: &str, mark_prefix: &str, styles: &[String]) -> Self {
        let opener = opener_pattern(styles);
        let p = regex::escape(prefix);
        let mp = regex::escape(mark_prefix);
        Self {
            title: compile(&format!(
                r"(?i)^\s*{opener}\s*{p}-\s*([^\s-][^\s]*)-([^\s].*)$"
            )),
            ordered: compile(&format!(
                r"(?i)^\s*{opener}\s*{p}-\s*(.+?)\s+(start|end|[0-9]+(?:\.[0-9]+)*)\s*(.*)$"
            )),
            no_order: compile(&format!(r"(?i)^\s*{opener}\s*{p}-\s*([^\s]+)\s+(.+)$")),
            mark: compile(&format!(r"(?i)^\s*{opener}\s*{mp}(?:-\s*(.+))?$")),
        }
    }

    /// Parse one line into at most one node. `line_number` is 1-based.
    pub fn parse_line(&self, line: &str, file: &Path, line_number: u32) -> Option<Node> {
        self.try_title(line, file, line_number)
            .or_else(|| self.try_ordered(line, file, line_number))
            .or_else(|| self.try_no_order(line, file, line_number))
            .or_else(|| self.try_mark(line, file, line_number))
    }

    /// Parse a whole text blob; nodes come back in source-line order.
    pub fn parse_text(&self, text: &str, file: &Path) -> Vec<Node> {
        text.lines()
            .enumerate()
            .filter_map(|(i, line)| self.parse_line(line, file, (i + 1) as u32))
            .collect()
    }

    /// `// flow-<feature>-<title> <desc…>` — the feature token is followed
    /// by an embedded hyphen and a title; the title is the first
    /// whitespace-delimited chunk after that hyphen.
    fn try_title(&self, line: &str, file: &Path, line_number: u32) -> Option<Node> {
        let caps = self.title.captures(line)?;
        let feature = caps[1].trim();
        let rest = caps[2].trim();
        let title = rest.split_whitespace().next().unwrap_or("");
        let desc = rest[title.len()..].trim();
        let meta = Meta {
            desc: (!desc.is_empty()).then(|| desc.to_string()),
            tags: Vec::new(),
            title: (!title.is_empty()).then(|| SmolStr::from(title)),
        };
        Some(Node::new(feature, Role::Title, file, line_number, Some(meta)))
    }

    /// `// flow-<feature> (start|end|<dotted-path>) <desc…>`.
    ///
    /// A path token whose first segment parses keeps only its leading valid
    /// integer segments; the regex leaves the invalid tail in the desc
    /// capture, so `1.a foo` becomes order `[1]` with desc `".a foo"`.
    fn try_ordered(&self, line: &str, file: &Path, line_number: u32) -> Option<Node> {
        let caps = self.ordered.captures(line)?;
        let feature = caps[1].trim();
        let kind = caps[2].trim().to_lowercase();
        let desc = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
        let role = match kind.as_str() {
            "start" => Role::Start,
            "end" => Role::End,
            _ => Role::Step {
                order: parse_order(&kind),
            },
        };
        let meta = (!desc.is_empty()).then(|| Meta::desc(desc));
        Some(Node::new(feature, role, file, line_number, meta))
    }

    /// `// flow-<feature> <desc…>` — an unordered step.
    fn try_no_order(&self, line: &str, file: &Path, line_number: u32) -> Option<Node> {
        let caps = self.no_order.captures(line)?;
        let feature = caps[1].trim();
        let desc = caps[2].trim();
        Some(Node::new(
            feature,
            Role::step(),
            file,
            line_number,
            Some(Meta::desc(desc)),
        ))
    }

    /// `// mark(-<desc>)?` — a free-standing mark, independent of the flow
    /// keyword.
    fn try_mark(&self, line: &str, file: &Path, line_number: u32) -> Option<Node> {
        let caps = self.mark.captures(line)?;
        let desc = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        let meta = (!desc.is_empty()).then(|| Meta::desc(desc));
        Some(Node::new(MARK_FEATURE, Role::Mark, file, line_number, meta))
    }
}

fn opener_pattern(styles: &[String]) -> String {
    let escaped: Vec<String> = if styles.is_empty() {
        DEFAULT_COMMENT_STYLES.iter().map(|s| regex::escape(s)).collect()
    } else {
        styles.iter().map(|s| regex::escape(s)).collect()
    };
    format!("(?:{})", escaped.join("|"))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("generated annotation pattern is valid")
}
