//! Node ordering within a feature.
//!
//! Role decides first: `start` sorts ahead of steps, and everything else
//! (`end`, `title`, `mark`) sorts after them. Order paths are only
//! consulted to break ties between two steps. The sort is stable, so nodes
//! the comparator considers equal keep their insertion order — the tree
//! view relies on that for secondary grouping.

use crate::base::OrderPath;
use crate::model::{FeatureGraph, Graph, Node, Role};
use std::cmp::Ordering;

fn role_weight(role: &Role) -> u8 {
    match role {
        Role::Start => 0,
        Role::Step { .. } => 1,
        _ => 2,
    }
}

/// Compare two optional order paths.
///
/// A node without an order compares equal to anything, so unordered steps
/// stay where insertion put them. Present paths compare level by level,
/// numerically; a strict prefix sorts before its extensions (`[1]` before
/// `[1, 2]`).
pub fn compare_order(a: Option<&OrderPath>, b: Option<&OrderPath>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.levels.cmp(&b.levels),
        _ => Ordering::Equal,
    }
}

/// Total order over nodes within one feature: role weight, then step order.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    let by_role = role_weight(&a.role).cmp(&role_weight(&b.role));
    if by_role != Ordering::Equal {
        return by_role;
    }
    match (&a.role, &b.role) {
        (Role::Step { order: oa }, Role::Step { order: ob }) => {
            compare_order(oa.as_ref(), ob.as_ref())
        }
        _ => Ordering::Equal,
    }
}

/// Stable-sort one feature's nodes in place.
pub fn sort_feature_graph(fg: &mut FeatureGraph) {
    fg.nodes.sort_by(compare_nodes);
}

/// Stable-sort every feature in the graph.
pub fn sort_graph(graph: &mut Graph) {
    for fg in graph.features.values_mut() {
        sort_feature_graph(fg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Meta;

    fn node(role: Role, line: u32) -> Node {
        Node::new("F", role, "/tmp/a.ts", line, None)
    }

    #[test]
    fn test_role_and_order_sort() {
        let mut fg = FeatureGraph::new("F");
        fg.nodes = vec![
            node(Role::step_at(vec![1, 2]), 4),
            node(Role::End, 5),
            node(Role::Start, 1),
            node(Role::step_at(vec![1, 1]), 3),
            node(Role::step_at(vec![1]), 2),
        ];
        sort_feature_graph(&mut fg);
        assert_eq!(fg.nodes[0].role, Role::Start);
        assert_eq!(fg.nodes[1].order().unwrap().levels, vec![1]);
        assert_eq!(fg.nodes[2].order().unwrap().levels, vec![1, 1]);
        assert_eq!(fg.nodes[3].order().unwrap().levels, vec![1, 2]);
        assert_eq!(fg.nodes[4].role, Role::End);
    }

    #[test]
    fn test_equal_orders_keep_relative_grouping() {
        let mut fg = FeatureGraph::new("F");
        let first = Node::new("F", Role::step_at(vec![2]), "/tmp/b.ts", 3, Some(Meta::desc("a")));
        let second = Node::new("F", Role::step_at(vec![2]), "/tmp/b.ts", 4, Some(Meta::desc("b")));
        fg.nodes = vec![node(Role::Start, 1), first.clone(), second.clone(), node(Role::End, 99)];
        sort_feature_graph(&mut fg);
        assert_eq!(fg.nodes[1], first);
        assert_eq!(fg.nodes[2], second);
        assert_eq!(fg.nodes[3].role, Role::End);
    }

    #[test]
    fn test_unordered_steps_stay_in_insertion_order() {
        let mut fg = FeatureGraph::new("F");
        let loose = Node::new("F", Role::step(), "/tmp/a.ts", 7, Some(Meta::desc("loose")));
        fg.nodes = vec![
            node(Role::step_at(vec![3]), 2),
            loose.clone(),
            node(Role::step_at(vec![1]), 4),
        ];
        sort_feature_graph(&mut fg);
        // the unordered step compares equal to both neighbors, so the
        // stable sort leaves it between them
        assert_eq!(fg.nodes[1], loose);
    }

    #[test]
    fn test_title_and_mark_sort_after_steps() {
        let mut fg = FeatureGraph::new("F");
        fg.nodes = vec![
            node(Role::Title, 1),
            node(Role::step_at(vec![1]), 2),
            node(Role::Start, 3),
        ];
        sort_feature_graph(&mut fg);
        assert_eq!(fg.nodes[0].role, Role::Start);
        assert!(fg.nodes[1].role.is_step());
        assert_eq!(fg.nodes[2].role, Role::Title);
    }
}
