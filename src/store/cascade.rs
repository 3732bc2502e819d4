// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Subtree deletion.

use std::collections::BTreeSet;

use crate::model::{Edge, Node, NodeId};

/// `target` plus every node whose parent chain reaches it.
///
/// Rescans until no new descendant turns up, so input order does not matter.
pub fn subtree_of(target: NodeId, nodes: &[Node]) -> BTreeSet<NodeId> {
    let mut doomed = BTreeSet::from([target]);
    loop {
        let before = doomed.len();
        for node in nodes {
            if node.parent_id().is_some_and(|parent| doomed.contains(&parent)) {
                doomed.insert(node.id());
            }
        }
        if doomed.len() == before {
            return doomed;
        }
    }
}

/// Removes `target`, its descendants and every edge touching any of them.
pub fn cascade_delete<'a>(
    target: NodeId,
    nodes: &[Node],
    edges: impl IntoIterator<Item = &'a Edge>,
) -> (Vec<Node>, Vec<Edge>) {
    let doomed = subtree_of(target, nodes);
    let kept_nodes = nodes.iter().filter(|n| !doomed.contains(&n.id())).cloned().collect();
    let kept_edges = edges
        .into_iter()
        .filter(|e| !doomed.contains(&e.source()) && !doomed.contains(&e.target()))
        .cloned()
        .collect();
    (kept_nodes, kept_edges)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{cascade_delete, subtree_of};
    use crate::model::fixtures::{nested_stack, raw_node};
    use crate::model::{Edge, NodeId, NodeKind};

    fn id(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    #[test]
    fn subtree_reaches_every_depth_regardless_of_order() {
        let mut nodes = nested_stack();
        nodes.reverse();
        assert_eq!(subtree_of(id(2), &nodes), BTreeSet::from([id(2), id(3), id(4), id(5)]));
        assert_eq!(subtree_of(id(4), &nodes), BTreeSet::from([id(4)]));
    }

    #[test]
    fn cascade_removes_descendants_and_their_edges_only() {
        let mut nodes = nested_stack();
        nodes.push(raw_node(6, NodeKind::Region, None));
        nodes.push(raw_node(7, NodeKind::AvailabilityZone, Some(6)));
        let edges = vec![
            Edge::new(id(4), id(5)),
            Edge::new(id(7), id(3)),
            Edge::new(id(1), id(6)),
            Edge::new(id(6), id(7)),
        ];

        let (kept_nodes, kept_edges) = cascade_delete(id(2), &nodes, &edges);

        let kept_ids = kept_nodes.iter().map(|n| n.id()).collect::<Vec<_>>();
        assert_eq!(kept_ids, vec![id(1), id(6), id(7)]);
        assert_eq!(kept_edges, vec![Edge::new(id(1), id(6)), Edge::new(id(6), id(7))]);
    }

    #[test]
    fn cascading_an_unknown_node_changes_nothing() {
        let nodes = nested_stack();
        let edges = vec![Edge::new(id(4), id(5))];
        let (kept_nodes, kept_edges) = cascade_delete(id(99), &nodes, &edges);
        assert_eq!(kept_nodes, nodes);
        assert_eq!(kept_edges, edges);
    }
}
