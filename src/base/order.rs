//! Multi-level step order paths.
//!
//! A step annotation may carry a dotted order token (`1`, `2.3`, `1.2.3`)
//! expressing its position in a multi-level step hierarchy. The path is a
//! sequence of non-negative integers; paths are compared numerically, level
//! by level, with a strict prefix sorting before its extensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The parsed levels of a dotted step order (`"1.2.3"` ⇒ `[1, 2, 3]`).
///
/// The derived ordering is lexicographic over levels with numeric
/// comparison per level, so `[1] < [1, 2] < [1, 10] < [2]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderPath {
    pub levels: Vec<u64>,
}

impl OrderPath {
    pub fn new(levels: Vec<u64>) -> Self {
        Self { levels }
    }

    /// Number of levels in the path.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl fmt::Display for OrderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for level in &self.levels {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{level}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<u64>> for OrderPath {
    fn from(levels: Vec<u64>) -> Self {
        Self { levels }
    }
}
