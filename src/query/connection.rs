// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Admission checks for new edges.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use thiserror::Error;

use crate::model::{Edge, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("Cannot connect a node to itself")]
    SelfConnection,
    #[error("This connection would create a cycle")]
    Cycle,
}

/// Checks whether `source -> target` may be added to `edges`.
///
/// Self-connections are always rejected; cycles only when `prevent_cycles` is set.
pub fn validate_connection<'a>(
    source: NodeId,
    target: NodeId,
    edges: impl IntoIterator<Item = &'a Edge>,
    prevent_cycles: bool,
) -> Result<(), ConnectionError> {
    if source == target {
        return Err(ConnectionError::SelfConnection);
    }
    if prevent_cycles && would_create_cycle(source, target, edges) {
        return Err(ConnectionError::Cycle);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Open,
    Done,
}

/// Whether the edge set plus the candidate `source -> target` has a cycle reachable
/// from `source`.
///
/// Depth-first over an explicit stack; a successor that is still open closes a cycle.
pub fn would_create_cycle<'a>(
    source: NodeId,
    target: NodeId,
    edges: impl IntoIterator<Item = &'a Edge>,
) -> bool {
    let mut outgoing: BTreeMap<NodeId, SmallVec<[NodeId; 4]>> = BTreeMap::new();
    for edge in edges {
        outgoing.entry(edge.source()).or_default().push(edge.target());
    }
    outgoing.entry(source).or_default().push(target);

    let mut visit: BTreeMap<NodeId, Visit> = BTreeMap::from([(source, Visit::Open)]);
    let mut stack: Vec<(NodeId, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        frame.1 += 1;

        let Some(&next) = outgoing.get(&node).and_then(|targets| targets.get(cursor)) else {
            visit.insert(node, Visit::Done);
            stack.pop();
            continue;
        };

        match visit.get(&next) {
            Some(Visit::Open) => return true,
            Some(Visit::Done) => {}
            None => {
                visit.insert(next, Visit::Open);
                stack.push((next, 0));
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{validate_connection, would_create_cycle, ConnectionError};
    use crate::model::fixtures::edge_chain;
    use crate::model::{Edge, NodeId};

    fn id(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    #[test]
    fn self_connections_are_rejected_regardless_of_cycle_setting() {
        for prevent_cycles in [true, false] {
            assert_eq!(
                validate_connection(id(1), id(1), &[], prevent_cycles),
                Err(ConnectionError::SelfConnection)
            );
        }
    }

    #[test]
    fn closing_a_three_cycle_is_rejected_only_when_prevention_is_on() {
        let edges = edge_chain();
        assert_eq!(validate_connection(id(3), id(1), &edges, true), Err(ConnectionError::Cycle));
        assert_eq!(validate_connection(id(3), id(1), &edges, false), Ok(()));
    }

    #[test]
    fn forward_and_parallel_edges_are_not_cycles() {
        let edges = edge_chain();
        assert!(!would_create_cycle(id(1), id(3), &edges));
        assert!(!would_create_cycle(id(1), id(2), &edges));
        assert!(!would_create_cycle(id(4), id(1), &edges));
    }

    #[test]
    fn direct_back_edge_is_a_cycle() {
        let edges = vec![Edge::new(id(1), id(2))];
        assert!(would_create_cycle(id(2), id(1), &edges));
    }

    #[test]
    fn diamond_is_acyclic_but_closing_it_is_not() {
        let edges = vec![
            Edge::new(id(1), id(2)),
            Edge::new(id(1), id(3)),
            Edge::new(id(2), id(4)),
            Edge::new(id(3), id(4)),
        ];
        assert!(!would_create_cycle(id(1), id(4), &edges));
        assert!(would_create_cycle(id(4), id(1), &edges));
        assert!(!would_create_cycle(id(3), id(2), &edges));
    }
}
