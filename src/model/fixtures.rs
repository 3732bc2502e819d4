// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::edge::Edge;
use super::geometry::Point;
use super::ids::NodeId;
use super::kind::NodeKind;
use super::node::Node;

fn nid(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

pub(crate) fn raw_node(raw: u64, kind: NodeKind, parent: Option<u64>) -> Node {
    Node::new(nid(raw), kind, "", parent.map(nid), Point::ORIGIN)
}

fn placed(raw: u64, kind: NodeKind, value: &str, parent: Option<u64>, x: f64, y: f64) -> Node {
    Node::new(nid(raw), kind, value, parent.map(nid), Point::new(x, y))
}

/// Region(1) > AZ(2) > VPC(3) > {Bucket(4), Instance(5)} at default sizes.
pub(crate) fn nested_stack() -> Vec<Node> {
    vec![
        placed(1, NodeKind::Region, "us-east-1", None, 0.0, 0.0),
        placed(2, NodeKind::AvailabilityZone, "us-east-1a", Some(1), 20.0, 30.0),
        placed(3, NodeKind::Vpc, "vpc-123", Some(2), 10.0, 20.0),
        placed(4, NodeKind::Bucket, "my-bucket", Some(3), 10.0, 30.0),
        placed(5, NodeKind::Instance, "i-1234567890abcdef0", Some(3), 65.0, 35.0),
    ]
}

/// node-1 -> node-2 -> node-3.
pub(crate) fn edge_chain() -> Vec<Edge> {
    vec![Edge::new(nid(1), nid(2)), Edge::new(nid(2), nid(3))]
}
