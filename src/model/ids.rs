// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const NODE_PREFIX: &str = "node-";
const EDGE_PREFIX: &str = "edge-";

/// Opaque, monotonic handle for a node.
///
/// Handles are minted by [`NodeIdAllocator`] and never reused within a diagram, so a
/// parent always carries a smaller id than any of its children. The textual form is
/// `node-<n>`, which is what the rendering surface sees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId(u64);

impl NodeId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NODE_PREFIX}{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(NODE_PREFIX)
            .ok_or_else(|| IdError::MissingPrefix { expected: NODE_PREFIX, found: s.to_owned() })?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidNumber(s.to_owned()));
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidNumber(s.to_owned()))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Identifier of a directed edge, derived from its ordered endpoint pair.
///
/// Two connects between the same ordered pair always produce the same id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct EdgeId {
    source: NodeId,
    target: NodeId,
}

impl EdgeId {
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    pub const fn source(&self) -> NodeId {
        self.source
    }

    pub const fn target(&self) -> NodeId {
        self.target
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.source == node_id || self.target == node_id
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{EDGE_PREFIX}{}-{}", self.source, self.target)
    }
}

impl FromStr for EdgeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pair = s
            .strip_prefix(EDGE_PREFIX)
            .ok_or_else(|| IdError::MissingPrefix { expected: EDGE_PREFIX, found: s.to_owned() })?;

        // `node-<a>-node-<b>`: the separator is the second `-node-`.
        let separator = format!("-{NODE_PREFIX}");
        let split_at = pair
            .get(NODE_PREFIX.len()..)
            .and_then(|tail| tail.find(&separator))
            .map(|offset| offset + NODE_PREFIX.len())
            .ok_or_else(|| IdError::MalformedEdge(s.to_owned()))?;

        let source = pair[..split_at].parse()?;
        let target = pair[split_at + 1..].parse()?;
        Ok(Self { source, target })
    }
}

impl From<EdgeId> for String {
    fn from(id: EdgeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for EdgeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id '{found}' must start with '{expected}'")]
    MissingPrefix { expected: &'static str, found: String },
    #[error("id '{0}' does not end in a decimal number")]
    InvalidNumber(String),
    #[error("edge id '{0}' is not of the form edge-<source>-<target>")]
    MalformedEdge(String),
}

/// Arena-style allocator owned by the node store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdAllocator {
    next: u64,
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl NodeIdAllocator {
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// The id the next call to [`Self::allocate`] will hand out.
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}
