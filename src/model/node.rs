//! Annotation nodes: one parsed comment line.

use crate::base::OrderPath;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::path::{Path, PathBuf};

/// The kind of an annotation node.
///
/// A closed variant set; the step order path exists only on [`Role::Step`],
/// so a start/end/title/mark node cannot carry an order by construction.
///
/// The serde representation tags on `"role"` with lowercase names, so a
/// persisted step node reads `{"role":"step","order":{"levels":[1,2]},…}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    Start,
    Step {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        order: Option<OrderPath>,
    },
    End,
    Title,
    Mark,
}

impl Role {
    /// An unordered step.
    pub fn step() -> Self {
        Role::Step { order: None }
    }

    /// A step with the given order levels.
    pub fn step_at(levels: impl Into<OrderPath>) -> Self {
        Role::Step {
            order: Some(levels.into()),
        }
    }

    /// Lowercase name, as used in node ids and the persisted form.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Start => "start",
            Role::Step { .. } => "step",
            Role::End => "end",
            Role::Title => "title",
            Role::Mark => "mark",
        }
    }

    /// The step order path, if this is an ordered step.
    pub fn order(&self) -> Option<&OrderPath> {
        match self {
            Role::Step { order } => order.as_ref(),
            _ => None,
        }
    }

    pub fn is_step(&self) -> bool {
        matches!(self, Role::Step { .. })
    }
}

/// Free-form descriptive text attached to an annotation line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Part of the persisted contract and the comment-hash payload; the
    /// grammar itself never fills it in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<SmolStr>,
}

impl Meta {
    /// A meta carrying only a description.
    pub fn desc(desc: impl Into<String>) -> Self {
        Self {
            desc: Some(desc.into()),
            ..Self::default()
        }
    }
}

/// One parsed annotation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Derived from `(feature, role, order, file, line)` — a display and
    /// dedup key, not a stable identity across edits (line numbers shift).
    pub id: String,
    /// Feature name grouping nodes into one flow.
    pub feature: SmolStr,
    #[serde(flatten)]
    pub role: Role,
    pub file: PathBuf,
    /// 1-based source line.
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Node {
    pub fn new(
        feature: impl Into<SmolStr>,
        role: Role,
        file: impl Into<PathBuf>,
        line: u32,
        meta: Option<Meta>,
    ) -> Self {
        let feature = feature.into();
        let file = file.into();
        let id = node_id(&feature, &role, &file, line);
        Self {
            id,
            feature,
            role,
            file,
            line,
            meta,
        }
    }

    /// The step order path, if any.
    pub fn order(&self) -> Option<&OrderPath> {
        self.role.order()
    }

    /// The descriptive text, if any.
    pub fn desc(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.desc.as_deref())
    }

    /// The title text, if this is a title node.
    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.title.as_deref())
    }
}

fn node_id(feature: &str, role: &Role, file: &Path, line: u32) -> String {
    let order = role
        .order()
        .map(|o| o.to_string())
        .unwrap_or_default();
    format!(
        "{feature}|{role}|{order}|{file}|{line}",
        role = role.name(),
        file = file.display()
    )
}
