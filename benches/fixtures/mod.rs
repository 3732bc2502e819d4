// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


#![allow(dead_code)]

// Deterministic benchmark fixtures (no RNG).

use stratus::model::{Diagram, NodeId, NodeKind, Point};
use stratus::ops::{apply_ops, Op};

/// Horizontal pitch between region stacks; wider than a region so drops never overlap.
const REGION_PITCH: f64 = 400.0;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
}

impl Case {
    pub fn regions(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 120,
        }
    }
}

/// Drop ops building `regions` full Region > AZ > VPC > {Bucket, Instance} stacks.
pub fn stack_ops(regions: usize) -> Vec<Op> {
    let mut ops = Vec::with_capacity(regions * 5);
    for idx in 0..regions {
        let x = idx as f64 * REGION_PITCH;
        for (kind, dx, dy) in [
            (NodeKind::Region, 0.0, 0.0),
            (NodeKind::AvailabilityZone, 20.0, 20.0),
            (NodeKind::Vpc, 30.0, 40.0),
            (NodeKind::Bucket, 40.0, 70.0),
            (NodeKind::Instance, 200.0, 70.0),
        ] {
            ops.push(Op::CreateNode { kind, position: Point::new(x + dx, dy) });
        }
    }
    ops
}

pub fn diagram(case: Case) -> Diagram {
    let mut diagram = Diagram::default();
    apply_ops(&mut diagram, 0, &stack_ops(case.regions())).expect("fixture stacks");
    diagram
}

/// Leaf ids in creation order: bucket then instance of every stack.
pub fn leaves(case: Case) -> Vec<NodeId> {
    (0..case.regions() as u64)
        .flat_map(|idx| [NodeId::from_raw(idx * 5 + 4), NodeId::from_raw(idx * 5 + 5)])
        .collect()
}

/// A chain of connects across the leaves, `count` long at most.
pub fn chain_ops(leaves: &[NodeId], count: usize) -> Vec<Op> {
    leaves
        .windows(2)
        .take(count)
        .map(|pair| Op::Connect { source: pair[0], target: pair[1] })
        .collect()
}
