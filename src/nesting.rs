// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Containment rules between node kinds.
//!
//! Region ⊇ Availability Zone ⊇ VPC ⊇ {S3 bucket, EC2 instance}. Leaves contain nothing.

use crate::model::NodeKind;

/// Kinds that may be placed directly inside `parent`.
pub fn allowed_children(parent: NodeKind) -> &'static [NodeKind] {
    match parent {
        NodeKind::Region => &[NodeKind::AvailabilityZone],
        NodeKind::AvailabilityZone => &[NodeKind::Vpc],
        NodeKind::Vpc => &[NodeKind::Bucket, NodeKind::Instance],
        NodeKind::Bucket | NodeKind::Instance => &[],
    }
}

/// Kinds that may directly contain `child`.
pub fn allowed_parents(child: NodeKind) -> impl Iterator<Item = NodeKind> {
    NodeKind::ALL
        .into_iter()
        .filter(move |parent| allowed_children(*parent).contains(&child))
}

pub fn can_nest(child: NodeKind, parent: NodeKind) -> bool {
    allowed_children(parent).contains(&child)
}
