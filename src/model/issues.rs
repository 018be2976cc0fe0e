//! Derived structural-consistency summary for one feature.

/// A step order path that occurs more than once within a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOrder {
    /// Dotted order string, e.g. `"2.3"`.
    pub order: String,
    pub count: usize,
}

/// Structural issues of one feature, recomputed by the validator whenever
/// the feature's node set changes. Derived data, never hand-mutated.
///
/// `missing_start`/`missing_end` are true both when the marker is absent
/// and when it is duplicated (count 0 or count > 1); the raw counts are
/// exposed alongside so consumers can tell the two cases apart without
/// re-scanning the node list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureIssues {
    pub missing_start: bool,
    pub missing_end: bool,
    /// Order paths shared by more than one ordered step, in first-seen
    /// order. Steps without an order are never counted.
    pub duplicate_orders: Vec<DuplicateOrder>,
    pub start_count: usize,
    pub end_count: usize,
}

impl FeatureIssues {
    /// Whether anything at all is wrong with the feature.
    pub fn has_issues(&self) -> bool {
        self.missing_start || self.missing_end || !self.duplicate_orders.is_empty()
    }
}
