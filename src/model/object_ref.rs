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

use super::ids::{EdgeId, IdError, NodeId};

/// Reference to any object a diagram owns, as reported in deltas.
///
/// Canonical text form: `node/<node_id>` or `edge/<edge_id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "category", content = "id", rename_all = "snake_case")]
pub enum ObjectRef {
    Node(NodeId),
    Edge(EdgeId),
}

impl ObjectRef {
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            Self::Edge(_) => None,
        }
    }

    pub fn edge_id(&self) -> Option<EdgeId> {
        match self {
            Self::Node(_) => None,
            Self::Edge(id) => Some(*id),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseObjectRefError> {
        let (category, id) =
            input.split_once('/').ok_or(ParseObjectRefError::MissingCategory)?;
        if id.is_empty() {
            return Err(ParseObjectRefError::MissingObjectId);
        }
        match category {
            "node" => id.parse().map(Self::Node).map_err(ParseObjectRefError::InvalidId),
            "edge" => id.parse().map(Self::Edge).map_err(ParseObjectRefError::InvalidId),
            other => Err(ParseObjectRefError::UnknownCategory(other.to_owned())),
        }
    }
}

impl From<NodeId> for ObjectRef {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<EdgeId> for ObjectRef {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "node/{id}"),
            Self::Edge(id) => write!(f, "edge/{id}"),
        }
    }
}

impl FromStr for ObjectRef {
    type Err = ParseObjectRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseObjectRefError {
    #[error("object ref is missing the category segment")]
    MissingCategory,
    #[error("object ref is missing the object id")]
    MissingObjectId,
    #[error("unknown object category '{0}'")]
    UnknownCategory(String),
    #[error("invalid object id: {0}")]
    InvalidId(#[source] IdError),
}
