// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Edge, EdgeAction, EdgeId, NodeId};
use crate::query::{validate_connection, ConnectionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connected {
    Created(EdgeId),
    /// The ordered pair was already connected; the existing edge is left untouched.
    Existing(EdgeId),
}

/// Owns every edge, keyed by its pair-derived id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeStore {
    edges: BTreeMap<EdgeId, Edge>,
}

impl EdgeStore {
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn get(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.get(&edge_id)
    }

    /// Admits `source -> target` after validation; new edges start as READ.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        prevent_cycles: bool,
    ) -> Result<Connected, ConnectionError> {
        validate_connection(source, target, self.edges.values(), prevent_cycles)?;

        let edge_id = EdgeId::new(source, target);
        if self.edges.contains_key(&edge_id) {
            return Ok(Connected::Existing(edge_id));
        }
        self.edges.insert(edge_id, Edge::new(source, target));
        Ok(Connected::Created(edge_id))
    }

    /// Returns `false` when the edge is unknown.
    pub fn set_action(&mut self, edge_id: EdgeId, action: EdgeAction) -> bool {
        match self.edges.get_mut(&edge_id) {
            Some(edge) => {
                edge.set_action(action);
                true
            }
            None => false,
        }
    }

    pub fn set_selected(&mut self, edge_id: EdgeId, selected: bool) -> bool {
        match self.edges.get_mut(&edge_id) {
            Some(edge) => {
                edge.set_selected(selected);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, edge_id: EdgeId) -> Option<Edge> {
        self.edges.remove(&edge_id)
    }

    /// Drops every edge with an endpoint in `node_ids`.
    pub fn remove_touching(&mut self, node_ids: &BTreeSet<NodeId>) -> Vec<EdgeId> {
        let doomed = self
            .edges
            .values()
            .filter(|edge| node_ids.contains(&edge.source()) || node_ids.contains(&edge.target()))
            .map(Edge::id)
            .collect::<Vec<_>>();
        for edge_id in &doomed {
            self.edges.remove(edge_id);
        }
        doomed
    }
}
