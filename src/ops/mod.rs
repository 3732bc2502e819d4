// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Intents from the rendering surface and their application to a diagram.
//!
//! Ops carry plain data only. A batch is applied against working copies of the stores and
//! committed only if every op succeeds, then the diagram revision is bumped once. The
//! result carries a minimal delta the surface can use to refresh what it draws.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::model::{
    Diagram, EdgeAction, EdgeId, NodeId, NodeKind, ObjectRef, Point, Viewport,
};
use crate::query::{ConnectionError, HierarchyError};
use crate::store::{subtree_of, Connected, EdgeStore, NodeStore, NodeStoreError};

pub use crate::store::NodeChange;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Palette drop at `position` (absolute diagram coordinates).
    CreateNode { kind: NodeKind, position: Point },
    UpdateNode { node_id: NodeId, change: NodeChange },
    DeleteNode { node_id: NodeId },
    Connect { source: NodeId, target: NodeId },
    SetEdgeAction { edge_id: EdgeId, action: EdgeAction },
    SelectEdge { edge_id: EdgeId, selected: bool },
    DeleteEdge { edge_id: EdgeId },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateNode { .. } => "create_node",
            Self::UpdateNode { .. } => "update_node",
            Self::DeleteNode { .. } => "delete_node",
            Self::Connect { .. } => "connect",
            Self::SetEdgeAction { .. } => "set_edge_action",
            Self::SelectEdge { .. } => "select_edge",
            Self::DeleteEdge { .. } => "delete_edge",
        }
    }
}

/// Turns a palette drag payload dropped at a screen position into a create op.
///
/// Unrecognised payloads yield `None`; the drop is simply ignored.
pub fn parse_drop(payload: &str, screen: Point, viewport: Viewport) -> Option<Op> {
    let Ok(kind) = payload.trim().parse::<NodeKind>() else {
        tracing::debug!(payload, "ignoring drop with unknown palette payload");
        return None;
    };
    Some(Op::CreateNode { kind, position: viewport.screen_to_diagram(screen) })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

impl ApplyResult {
    /// First node the batch added, if any.
    pub fn created_node(&self) -> Option<NodeId> {
        self.delta.added.iter().find_map(ObjectRef::node_id)
    }

    pub fn created_edge(&self) -> Option<EdgeId> {
        self.delta.added.iter().find_map(ObjectRef::edge_id)
    }
}

/// Which objects changed as the result of applying ops, each list sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub added: Vec<ObjectRef>,
    pub removed: Vec<ObjectRef>,
    pub updated: Vec<ObjectRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<ObjectRef>,
    removed: BTreeSet<ObjectRef>,
    updated: BTreeSet<ObjectRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, object_ref: ObjectRef) {
        // Pair-derived edge ids can come back after a delete within the same batch.
        if self.removed.remove(&object_ref) {
            self.updated.insert(object_ref);
            return;
        }
        self.added.insert(object_ref);
    }

    fn record_removed(&mut self, object_ref: ObjectRef) {
        self.updated.remove(&object_ref);
        if self.added.remove(&object_ref) {
            return;
        }
        self.removed.insert(object_ref);
    }

    fn record_updated(&mut self, object_ref: ObjectRef) {
        if self.added.contains(&object_ref) || self.removed.contains(&object_ref) {
            return;
        }
        self.updated.insert(object_ref);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

/// A mutation the user attempted that the diagram rules do not allow. The display text
/// is meant to be shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Cannot nest {child} inside {parent}")]
    NestingNotAllowed { child: NodeKind, parent: NodeKind },
    #[error("Cannot connect a node to itself")]
    SelfConnection,
    #[error("This connection would create a cycle")]
    Cycle,
}

impl From<ConnectionError> for Rejection {
    fn from(err: ConnectionError) -> Self {
        match err {
            ConnectionError::SelfConnection => Self::SelfConnection,
            ConnectionError::Cycle => Self::Cycle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("stale base_rev (base_rev={base_rev}, current_rev={current_rev})")]
    Conflict { base_rev: u64, current_rev: u64 },
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

impl ApplyError {
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

pub fn apply_ops(
    diagram: &mut Diagram,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = diagram.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: Delta::default() });
    }

    let config = *diagram.config();
    let mut nodes = diagram.nodes().clone();
    let mut edges = diagram.edges().clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        if let Err(err) = apply_op(&config, &mut nodes, &mut edges, op, &mut delta) {
            tracing::warn!(op = op.name(), error = %err, "op rejected, batch discarded");
            return Err(err);
        }
    }

    diagram.replace_stores(nodes, edges);
    diagram.bump_rev();
    let new_rev = diagram.rev();

    Ok(ApplyResult { new_rev, applied: ops.len(), delta: delta.finish() })
}

// Per-op mutation logic.
include!("ops_impl.rs");
