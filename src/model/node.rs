// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::geometry::{Point, Rect, Size};
use super::ids::NodeId;
use super::kind::NodeKind;

/// A placed resource.
///
/// `position` is relative to the parent's origin when `parent_id` is set and absolute
/// otherwise. Only geometry and selection change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    label: SmolStr,
    value: SmolStr,
    parent_id: Option<NodeId>,
    position: Point,
    size: Size,
    #[serde(default)]
    selected: bool,
}

impl Node {
    pub fn new(
        id: NodeId,
        kind: NodeKind,
        value: impl Into<SmolStr>,
        parent_id: Option<NodeId>,
        position: Point,
    ) -> Self {
        Self {
            id,
            kind,
            label: SmolStr::new_static(kind.label()),
            value: value.into(),
            parent_id,
            position,
            size: kind.default_size(),
            selected: false,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Bounds in the parent's coordinate space.
    pub fn local_bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Applies a new size, never shrinking below the kind's minimum.
    pub fn set_size(&mut self, size: Size) {
        self.size = size.at_least(self.kind.min_size());
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::model::{NodeId, NodeKind, Point, Size};

    #[test]
    fn node_takes_label_and_size_from_its_kind() {
        let mut node = Node::new(
            NodeId::from_raw(1),
            NodeKind::Vpc,
            "vpc-123",
            Some(NodeId::from_raw(0)),
            Point::new(10.0, 20.0),
        );
        assert_eq!(node.label(), "VPC");
        assert_eq!(node.value(), "vpc-123");
        assert_eq!(node.size(), Size::new(220.0, 180.0));
        assert!(!node.selected());

        node.set_size(Size::new(10.0, 400.0));
        assert_eq!(node.size(), Size::new(160.0, 400.0));

        node.set_selected(true);
        node.set_position(Point::new(1.0, 2.0));
        assert!(node.selected());
        assert_eq!(node.local_bounds().origin, Point::new(1.0, 2.0));
    }
}
