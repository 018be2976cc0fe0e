//! Structural-consistency validation for one feature.

use crate::model::{DuplicateOrder, FeatureGraph, FeatureIssues, Role};
use indexmap::IndexMap;

/// Compute the derived issue summary for one feature.
///
/// Pure: re-derivable from the feature graph alone at any time. The
/// `missing_start`/`missing_end` booleans are true both for an absent and
/// for a duplicated marker; duplicate-order detection covers only steps
/// carrying a present, non-empty order path.
pub fn compute_feature_issues(fg: &FeatureGraph) -> FeatureIssues {
    let start_count = fg.nodes.iter().filter(|n| n.role == Role::Start).count();
    let end_count = fg.nodes.iter().filter(|n| n.role == Role::End).count();

    let mut orders: IndexMap<String, usize> = IndexMap::new();
    for node in &fg.nodes {
        if node.role.is_step() {
            if let Some(order) = node.order() {
                if !order.is_empty() {
                    *orders.entry(order.to_string()).or_insert(0) += 1;
                }
            }
        }
    }
    let duplicate_orders = orders
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(order, count)| DuplicateOrder { order, count })
        .collect();

    FeatureIssues {
        missing_start: start_count == 0 || start_count > 1,
        missing_end: end_count == 0 || end_count > 1,
        duplicate_orders,
        start_count,
        end_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    fn push(fg: &mut FeatureGraph, role: Role, line: u32) {
        fg.nodes.push(Node::new("Feat", role, "/tmp/v.ts", line, None));
    }

    #[test]
    fn test_missing_and_duplicate_start_end_and_orders() {
        let mut fg = FeatureGraph::new("Feat");
        push(&mut fg, Role::step_at(vec![1]), 2);
        push(&mut fg, Role::step_at(vec![1]), 3);
        push(&mut fg, Role::End, 99);

        let issues = compute_feature_issues(&fg);
        assert!(issues.missing_start);
        assert!(!issues.missing_end);
        assert_eq!(issues.duplicate_orders.len(), 1);
        assert_eq!(issues.duplicate_orders[0].order, "1");
        assert_eq!(issues.duplicate_orders[0].count, 2);
        assert_eq!(issues.start_count, 0);

        // two starts flag the same boolean as zero starts
        push(&mut fg, Role::Start, 1);
        push(&mut fg, Role::Start, 10);
        let issues = compute_feature_issues(&fg);
        assert!(issues.missing_start);
        assert_eq!(issues.start_count, 2);

        fg.nodes.retain(|n| n.role != Role::End);
        let issues = compute_feature_issues(&fg);
        assert!(issues.missing_end);
        assert_eq!(issues.end_count, 0);
    }

    #[test]
    fn test_unordered_steps_are_never_duplicates() {
        let mut fg = FeatureGraph::new("X");
        push(&mut fg, Role::Start, 1);
        push(&mut fg, Role::step(), 2);
        push(&mut fg, Role::step(), 3);
        push(&mut fg, Role::step_at(vec![2, 3]), 4);
        push(&mut fg, Role::step_at(vec![2, 3]), 5);
        push(&mut fg, Role::End, 99);

        let issues = compute_feature_issues(&fg);
        assert!(!issues.missing_start);
        assert!(!issues.missing_end);
        assert_eq!(issues.duplicate_orders.len(), 1);
        assert_eq!(issues.duplicate_orders[0].order, "2.3");
        assert_eq!(issues.duplicate_orders[0].count, 2);
    }

    #[test]
    fn test_clean_feature_has_no_issues() {
        let mut fg = FeatureGraph::new("Ok");
        push(&mut fg, Role::Start, 1);
        push(&mut fg, Role::step_at(vec![1]), 2);
        push(&mut fg, Role::step_at(vec![2]), 3);
        push(&mut fg, Role::End, 4);

        let issues = compute_feature_issues(&fg);
        assert!(!issues.has_issues());
        assert_eq!(issues.start_count, 1);
        assert_eq!(issues.end_count, 1);
    }

    #[test]
    fn test_duplicates_report_in_first_seen_order() {
        let mut fg = FeatureGraph::new("F");
        for levels in [vec![5], vec![2], vec![5], vec![2]] {
            push(&mut fg, Role::step_at(levels), 1);
        }
        let issues = compute_feature_issues(&fg);
        let orders: Vec<_> = issues.duplicate_orders.iter().map(|d| d.order.as_str()).collect();
        assert_eq!(orders, vec!["5", "2"]);
    }
}
