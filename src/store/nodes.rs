// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LeafValues;
use crate::model::{Node, NodeId, NodeIdAllocator, NodeKind, Point, Size};
use crate::naming::generate_value;
use crate::nesting::can_nest;
use crate::query::{absolute_bounds, innermost_container, sort_by_hierarchy, HierarchyError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeStoreError {
    #[error("Cannot nest {child} inside {parent}")]
    NestingNotAllowed { child: NodeKind, parent: NodeKind },
    #[error("parent {0} does not exist")]
    UnknownParent(NodeId),
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

/// A geometry or selection change reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum NodeChange {
    /// New position in the parent's coordinate space.
    Position { position: Point },
    Dimensions { size: Size },
    Select { selected: bool },
}

/// Owns every node, kept in parent-before-child order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
    ids: NodeIdAllocator,
}

impl NodeStore {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == node_id)
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.get(node_id).is_some()
    }

    fn get_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == node_id)
    }

    /// Creates a node dropped at `drop_point` (absolute diagram coordinates), nesting it
    /// inside the innermost node under the point.
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        drop_point: Point,
        leaf_values: LeafValues,
    ) -> Result<NodeId, NodeStoreError> {
        let parent = innermost_container(&self.nodes, drop_point)?.map(Node::id);
        self.create_node_in(kind, drop_point, parent, leaf_values)
    }

    /// Creates a node under an already resolved parent candidate.
    pub fn create_node_in(
        &mut self,
        kind: NodeKind,
        drop_point: Point,
        parent_id: Option<NodeId>,
        leaf_values: LeafValues,
    ) -> Result<NodeId, NodeStoreError> {
        let parent = match parent_id {
            Some(parent_id) => {
                let parent = self.get(parent_id).ok_or(NodeStoreError::UnknownParent(parent_id))?;
                if !can_nest(kind, parent.kind()) {
                    return Err(NodeStoreError::NestingNotAllowed {
                        child: kind,
                        parent: parent.kind(),
                    });
                }
                Some(parent)
            }
            None => None,
        };

        let position = match parent {
            Some(parent) => {
                let bounds = absolute_bounds(&self.nodes)?;
                let origin = bounds.get(&parent.id()).map_or(Point::ORIGIN, |rect| rect.origin);
                drop_point - origin
            }
            None => drop_point,
        };
        let value = generate_value(kind, parent, &self.nodes, leaf_values);

        let node_id = self.ids.allocate();
        self.nodes.push(Node::new(node_id, kind, value, parent_id, position));
        self.reorder()?;
        Ok(node_id)
    }

    /// Applies a reported change. Returns `false` when the node is unknown.
    pub fn update_node(
        &mut self,
        node_id: NodeId,
        change: NodeChange,
        parent_extent: bool,
    ) -> Result<bool, HierarchyError> {
        let parent_size = self
            .get(node_id)
            .and_then(Node::parent_id)
            .and_then(|parent| self.get(parent))
            .map(Node::size);

        let Some(node) = self.get_mut(node_id) else {
            return Ok(false);
        };
        match change {
            NodeChange::Position { position } => node.set_position(position),
            NodeChange::Dimensions { size } => node.set_size(size),
            NodeChange::Select { selected } => node.set_selected(selected),
        }
        if let (true, Some(parent_size)) = (parent_extent, parent_size) {
            node.set_position(clamp_into(node.position(), node.size(), parent_size));
        }

        self.reorder()?;
        Ok(true)
    }

    /// Drops every node in `node_ids`.
    pub fn remove_all(&mut self, node_ids: &BTreeSet<NodeId>) -> Vec<NodeId> {
        let removed = self
            .nodes
            .iter()
            .map(Node::id)
            .filter(|id| node_ids.contains(id))
            .collect::<Vec<_>>();
        self.nodes.retain(|node| !node_ids.contains(&node.id()));
        removed
    }

    fn reorder(&mut self) -> Result<(), HierarchyError> {
        sort_by_hierarchy(&mut self.nodes)
    }
}

/// Keeps a child's box inside its parent's box, pinning it to the top-left when it
/// does not fit.
fn clamp_into(position: Point, size: Size, parent: Size) -> Point {
    let max_x = (parent.width - size.width).max(0.0);
    let max_y = (parent.height - size.height).max(0.0);
    Point::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
}
