// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::model::{Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("parent chain of {node_id} loops back on itself")]
    ParentCycle { node_id: NodeId },
}

/// Number of ancestor hops from each node to its root.
///
/// A node whose parent is missing from `nodes` counts as a root. Parent chains are walked
/// iteratively; a chain that revisits a node fails with [`HierarchyError::ParentCycle`].
pub fn depths(nodes: &[Node]) -> Result<BTreeMap<NodeId, usize>, HierarchyError> {
    let parents = nodes.iter().map(|n| (n.id(), n.parent_id())).collect::<BTreeMap<_, _>>();
    let mut depth: BTreeMap<NodeId, usize> = BTreeMap::new();

    for node in nodes {
        if depth.contains_key(&node.id()) {
            continue;
        }

        let mut chain: Vec<NodeId> = Vec::new();
        let mut on_chain: BTreeSet<NodeId> = BTreeSet::new();
        let mut cursor = Some(node.id());
        let mut base = 0usize;

        while let Some(current) = cursor {
            if let Some(known) = depth.get(&current) {
                base = known + 1;
                break;
            }
            if !on_chain.insert(current) {
                return Err(HierarchyError::ParentCycle { node_id: current });
            }
            chain.push(current);
            cursor = parents
                .get(&current)
                .copied()
                .flatten()
                .filter(|parent| parents.contains_key(parent));
        }

        // `chain` runs child -> root; depths grow back down it.
        for (offset, id) in chain.iter().rev().enumerate() {
            depth.insert(*id, base + offset);
        }
    }

    Ok(depth)
}

/// Stable reorder so that every node follows its parent.
pub fn sort_by_hierarchy(nodes: &mut [Node]) -> Result<(), HierarchyError> {
    let depth = depths(nodes)?;
    nodes.sort_by_key(|node| depth.get(&node.id()).copied().unwrap_or(0));
    Ok(())
}

pub fn order_by_hierarchy(nodes: &[Node]) -> Result<Vec<Node>, HierarchyError> {
    let mut ordered = nodes.to_vec();
    sort_by_hierarchy(&mut ordered)?;
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::{depths, order_by_hierarchy, HierarchyError};
    use crate::model::fixtures::raw_node;
    use crate::model::{NodeId, NodeKind};

    fn id(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    #[test]
    fn depth_counts_ancestor_hops_and_treats_orphans_as_roots() {
        let nodes = vec![
            raw_node(4, NodeKind::Bucket, Some(3)),
            raw_node(3, NodeKind::Vpc, Some(2)),
            raw_node(2, NodeKind::AvailabilityZone, Some(1)),
            raw_node(1, NodeKind::Region, None),
            raw_node(9, NodeKind::Vpc, Some(42)),
        ];
        let depth = depths(&nodes).expect("acyclic");
        assert_eq!(depth[&id(1)], 0);
        assert_eq!(depth[&id(2)], 1);
        assert_eq!(depth[&id(3)], 2);
        assert_eq!(depth[&id(4)], 3);
        assert_eq!(depth[&id(9)], 0);
    }

    #[test]
    fn ordering_puts_parents_first_and_keeps_sibling_order() {
        let nodes = vec![
            raw_node(5, NodeKind::Instance, Some(3)),
            raw_node(4, NodeKind::Bucket, Some(3)),
            raw_node(3, NodeKind::Vpc, None),
            raw_node(7, NodeKind::Region, None),
        ];
        let ordered = order_by_hierarchy(&nodes).expect("acyclic");
        let ids = ordered.iter().map(|n| n.id().raw()).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 7, 5, 4]);
    }

    #[test]
    fn parent_cycles_fail_fast_instead_of_recursing() {
        let nodes = vec![
            raw_node(1, NodeKind::Region, Some(3)),
            raw_node(2, NodeKind::AvailabilityZone, Some(1)),
            raw_node(3, NodeKind::Vpc, Some(2)),
        ];
        assert!(matches!(depths(&nodes), Err(HierarchyError::ParentCycle { .. })));

        let self_parent = vec![raw_node(8, NodeKind::Vpc, Some(8))];
        assert_eq!(
            order_by_hierarchy(&self_parent),
            Err(HierarchyError::ParentCycle { node_id: id(8) })
        );
    }
}
