// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::geometry::{Point, Viewport};
use super::ids::{EdgeId, NodeId};
use super::kind::{EdgeAction, NodeKind};
use super::node::Node;
use crate::config::EngineConfig;
use crate::ops::{apply_ops, ApplyError, ApplyResult, Op};
use crate::store::{EdgeStore, NodeChange, NodeStore};

/// Immutable view handed to the rendering surface after every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSnapshot {
    pub rev: u64,
    /// Parent-before-child order.
    pub nodes: Vec<Node>,
    /// Sorted by edge id.
    pub edges: Vec<Edge>,
}

/// One editable architecture diagram: the node and edge stores plus the settings that
/// govern how intents are applied to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagram {
    nodes: NodeStore,
    edges: EdgeStore,
    config: EngineConfig,
    viewport: Viewport,
    rev: u64,
}

impl Diagram {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub(crate) fn replace_stores(&mut self, nodes: NodeStore, edges: EdgeStore) {
        self.nodes = nodes;
        self.edges = edges;
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        DiagramSnapshot {
            rev: self.rev,
            nodes: self.nodes.nodes().to_vec(),
            edges: self.edges.edges().cloned().collect(),
        }
    }

    /// Applies one intent against the current revision.
    pub fn apply(&mut self, op: Op) -> Result<ApplyResult, ApplyError> {
        let base_rev = self.rev;
        apply_ops(self, base_rev, std::slice::from_ref(&op))
    }

    /// Applies several intents atomically: either all of them land or none do.
    pub fn apply_batch(&mut self, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
        let base_rev = self.rev;
        apply_ops(self, base_rev, ops)
    }

    /// Drop of a palette item at a screen position.
    pub fn drop_at_screen(
        &mut self,
        kind: NodeKind,
        screen: Point,
    ) -> Result<ApplyResult, ApplyError> {
        let position = self.viewport.screen_to_diagram(screen);
        self.apply(Op::CreateNode { kind, position })
    }

    pub fn create_node(
        &mut self,
        kind: NodeKind,
        position: Point,
    ) -> Result<ApplyResult, ApplyError> {
        self.apply(Op::CreateNode { kind, position })
    }

    pub fn update_node_geometry(
        &mut self,
        node_id: NodeId,
        change: NodeChange,
    ) -> Result<ApplyResult, ApplyError> {
        self.apply(Op::UpdateNode { node_id, change })
    }

    pub fn connect_nodes(
        &mut self,
        source: NodeId,
        target: NodeId,
    ) -> Result<ApplyResult, ApplyError> {
        self.apply(Op::Connect { source, target })
    }

    pub fn set_edge_action(
        &mut self,
        edge_id: EdgeId,
        action: EdgeAction,
    ) -> Result<ApplyResult, ApplyError> {
        self.apply(Op::SetEdgeAction { edge_id, action })
    }

    pub fn delete_edge(&mut self, edge_id: EdgeId) -> Result<ApplyResult, ApplyError> {
        self.apply(Op::DeleteEdge { edge_id })
    }

    pub fn delete_node(&mut self, node_id: NodeId) -> Result<ApplyResult, ApplyError> {
        self.apply(Op::DeleteNode { node_id })
    }
}
