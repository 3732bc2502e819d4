// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Semantic values for new nodes (`us-east-1`, `us-east-1a`, `vpc-123`, ...).
//!
//! Generation is a pure function of the kind, the resolved parent and the nodes that
//! already exist. It never fails: exhausted pools fall back to synthesized names.

use smol_str::{format_smolstr, SmolStr};

use crate::config::LeafValues;
use crate::model::{Node, NodeKind};

pub const REGION_POOL: [&str; 6] =
    ["us-east-1", "us-east-2", "us-west-1", "us-west-2", "eu-west-1", "ap-southeast-1"];
pub const ZONE_LETTERS: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];
pub const FALLBACK_ZONE: &str = "us-east-1a";
pub const FIRST_VPC_NUMBER: u64 = 123;
pub const BUCKET_PLACEHOLDER: &str = "my-bucket";
pub const INSTANCE_PLACEHOLDER: &str = "i-1234567890abcdef0";

pub fn generate_value<'a>(
    kind: NodeKind,
    parent: Option<&Node>,
    existing: impl IntoIterator<Item = &'a Node>,
    leaf_values: LeafValues,
) -> SmolStr {
    let existing = existing.into_iter();
    match kind {
        NodeKind::Region => region_value(existing),
        NodeKind::AvailabilityZone => zone_value(parent, existing),
        NodeKind::Vpc => vpc_value(existing),
        NodeKind::Bucket => match leaf_values {
            LeafValues::Placeholder => SmolStr::new_static(BUCKET_PLACEHOLDER),
            LeafValues::Unique => bucket_value(existing),
        },
        NodeKind::Instance => match leaf_values {
            LeafValues::Placeholder => SmolStr::new_static(INSTANCE_PLACEHOLDER),
            LeafValues::Unique => instance_value(existing),
        },
    }
}

fn values_of<'a>(
    existing: impl Iterator<Item = &'a Node>,
    kind: NodeKind,
) -> impl Iterator<Item = &'a str> {
    existing.filter(move |node| node.kind() == kind).map(Node::value).filter(|v| !v.is_empty())
}

fn region_value<'a>(existing: impl Iterator<Item = &'a Node>) -> SmolStr {
    let taken = values_of(existing, NodeKind::Region).collect::<Vec<_>>();
    match REGION_POOL.into_iter().find(|candidate| !taken.contains(candidate)) {
        Some(candidate) => SmolStr::new_static(candidate),
        None => format_smolstr!("us-east-{}", taken.len() + 1),
    }
}

fn zone_value<'a>(parent: Option<&Node>, existing: impl Iterator<Item = &'a Node>) -> SmolStr {
    let Some(parent) = parent.filter(|parent| !parent.value().is_empty()) else {
        return SmolStr::new_static(FALLBACK_ZONE);
    };

    let siblings = existing
        .filter(|node| {
            node.kind() == NodeKind::AvailabilityZone && node.parent_id() == Some(parent.id())
        })
        .map(Node::value)
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>();
    let used = siblings.iter().filter_map(|value| zone_letter(value)).collect::<Vec<_>>();

    let letter = ZONE_LETTERS
        .iter()
        .copied()
        .find(|letter| !used.contains(letter))
        .unwrap_or_else(|| indexed_letter(siblings.len()));
    format_smolstr!("{}{letter}", parent.value())
}

/// `us-east-1a` -> `a`: last dash segment with its leading digits removed.
fn zone_letter(value: &str) -> Option<char> {
    let last = value.rsplit('-').next()?;
    last.trim_start_matches(|ch: char| ch.is_ascii_digit()).chars().next()
}

fn indexed_letter(index: usize) -> char {
    char::from(b'a' + (index % 26) as u8)
}

fn vpc_value<'a>(existing: impl Iterator<Item = &'a Node>) -> SmolStr {
    let next = values_of(existing, NodeKind::Vpc)
        .filter_map(|value| value.split('-').nth(1).and_then(leading_number))
        .max()
        .map_or(FIRST_VPC_NUMBER, |max| max.saturating_add(1));
    format_smolstr!("vpc-{next}")
}

fn leading_number(segment: &str) -> Option<u64> {
    let end = segment.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(segment.len());
    segment[..end].parse().ok()
}

fn bucket_value<'a>(existing: impl Iterator<Item = &'a Node>) -> SmolStr {
    let highest = values_of(existing, NodeKind::Bucket)
        .filter_map(|value| {
            let rest = value.strip_prefix(BUCKET_PLACEHOLDER)?;
            if rest.is_empty() {
                return Some(1);
            }
            rest.strip_prefix('-')?.parse::<u64>().ok()
        })
        .max();
    match highest {
        None => SmolStr::new_static(BUCKET_PLACEHOLDER),
        Some(n) => format_smolstr!("{BUCKET_PLACEHOLDER}-{}", n.saturating_add(1)),
    }
}

fn instance_value<'a>(existing: impl Iterator<Item = &'a Node>) -> SmolStr {
    let highest = values_of(existing, NodeKind::Instance)
        .filter_map(|value| u128::from_str_radix(value.strip_prefix("i-")?, 16).ok())
        .max();
    match highest {
        None => SmolStr::new_static(INSTANCE_PLACEHOLDER),
        Some(n) => format_smolstr!("i-{:017x}", n.saturating_add(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_value;
    use crate::config::LeafValues;
    use crate::model::{Node, NodeId, NodeKind, Point};

    fn node(id: u64, kind: NodeKind, value: &str, parent: Option<u64>) -> Node {
        Node::new(NodeId::from_raw(id), kind, value, parent.map(NodeId::from_raw), Point::ORIGIN)
    }

    fn next(kind: NodeKind, parent: Option<&Node>, existing: &[Node]) -> String {
        generate_value(kind, parent, existing, LeafValues::Unique).to_string()
    }

    #[test]
    fn regions_come_from_the_pool_in_order() {
        let mut nodes = Vec::new();
        for (idx, expected) in ["us-east-1", "us-east-2", "us-west-1"].into_iter().enumerate() {
            let value = next(NodeKind::Region, None, &nodes);
            assert_eq!(value, expected);
            nodes.push(node(idx as u64 + 1, NodeKind::Region, &value, None));
        }
    }

    #[test]
    fn regions_skip_taken_names_and_fall_back_when_exhausted() {
        let nodes = vec![node(1, NodeKind::Region, "us-east-1", None)];
        assert_eq!(next(NodeKind::Region, None, &nodes), "us-east-2");

        let full = super::REGION_POOL
            .iter()
            .enumerate()
            .map(|(idx, name)| node(idx as u64 + 1, NodeKind::Region, name, None))
            .collect::<Vec<_>>();
        assert_eq!(next(NodeKind::Region, None, &full), "us-east-7");
    }

    #[test]
    fn zones_pick_the_first_free_letter_under_their_own_region() {
        let west = node(1, NodeKind::Region, "us-west-2", None);
        let east = node(2, NodeKind::Region, "us-east-1", None);
        let east_a = node(3, NodeKind::AvailabilityZone, "us-east-1a", Some(2));
        let mut nodes = vec![west.clone(), east, east_a];

        let first = next(NodeKind::AvailabilityZone, Some(&west), &nodes);
        assert_eq!(first, "us-west-2a");
        nodes.push(node(4, NodeKind::AvailabilityZone, &first, Some(1)));
        assert_eq!(next(NodeKind::AvailabilityZone, Some(&west), &nodes), "us-west-2b");
    }

    #[test]
    fn zones_reuse_freed_letters_and_index_past_f() {
        let region = node(1, NodeKind::Region, "eu-west-1", None);
        let zone_b = node(2, NodeKind::AvailabilityZone, "eu-west-1b", Some(1));
        let mut nodes = vec![region.clone(), zone_b];
        assert_eq!(next(NodeKind::AvailabilityZone, Some(&region), &nodes), "eu-west-1a");

        nodes.truncate(1);
        for (idx, letter) in ['a', 'b', 'c', 'd', 'e', 'f'].into_iter().enumerate() {
            let value = format!("eu-west-1{letter}");
            nodes.push(node(idx as u64 + 2, NodeKind::AvailabilityZone, &value, Some(1)));
        }
        assert_eq!(next(NodeKind::AvailabilityZone, Some(&region), &nodes), "eu-west-1g");
    }

    #[test]
    fn zones_without_a_valued_parent_use_the_fallback() {
        assert_eq!(next(NodeKind::AvailabilityZone, None, &[]), "us-east-1a");
        let unnamed = node(1, NodeKind::Region, "", None);
        assert_eq!(next(NodeKind::AvailabilityZone, Some(&unnamed), &[]), "us-east-1a");
    }

    #[test]
    fn vpc_numbers_are_global_not_per_parent() {
        assert_eq!(next(NodeKind::Vpc, None, &[]), "vpc-123");
        let nodes = vec![
            node(1, NodeKind::Vpc, "vpc-123", Some(10)),
            node(2, NodeKind::Vpc, "vpc-130", Some(11)),
        ];
        let other_zone = node(12, NodeKind::AvailabilityZone, "us-east-1c", None);
        assert_eq!(next(NodeKind::Vpc, Some(&other_zone), &nodes), "vpc-131");
    }

    #[test]
    fn leaves_are_unique_by_default_and_fixed_in_placeholder_mode() {
        let nodes = vec![
            node(1, NodeKind::Bucket, "my-bucket", None),
            node(2, NodeKind::Instance, "i-1234567890abcdef0", None),
        ];
        assert_eq!(next(NodeKind::Bucket, None, &[]), "my-bucket");
        assert_eq!(next(NodeKind::Bucket, None, &nodes), "my-bucket-2");
        assert_eq!(next(NodeKind::Instance, None, &nodes), "i-1234567890abcdef1");

        let fixed = generate_value(NodeKind::Bucket, None, &nodes, LeafValues::Placeholder);
        assert_eq!(fixed, "my-bucket");
        let fixed = generate_value(NodeKind::Instance, None, &nodes, LeafValues::Placeholder);
        assert_eq!(fixed, "i-1234567890abcdef0");
    }
}
