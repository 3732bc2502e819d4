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

use super::geometry::Size;

/// The five resource kinds a diagram can hold, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "region")]
    Region,
    #[serde(rename = "availabilityZone")]
    AvailabilityZone,
    #[serde(rename = "vpc")]
    Vpc,
    #[serde(rename = "s3")]
    Bucket,
    #[serde(rename = "ec2")]
    Instance,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Region,
        NodeKind::AvailabilityZone,
        NodeKind::Vpc,
        NodeKind::Bucket,
        NodeKind::Instance,
    ];

    /// Drag payload key used by the palette.
    pub fn key(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::AvailabilityZone => "availabilityZone",
            Self::Vpc => "vpc",
            Self::Bucket => "s3",
            Self::Instance => "ec2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::AvailabilityZone => "Availability Zone",
            Self::Vpc => "VPC",
            Self::Bucket => "Amazon S3",
            Self::Instance => "Amazon EC2",
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            Self::Region => Size::new(300.0, 250.0),
            Self::AvailabilityZone => Size::new(250.0, 200.0),
            Self::Vpc => Size::new(220.0, 180.0),
            Self::Bucket | Self::Instance => Size::new(150.0, 140.0),
        }
    }

    /// Smallest size a resize may shrink the node to.
    pub fn min_size(self) -> Size {
        match self {
            Self::Region => Size::new(200.0, 150.0),
            Self::AvailabilityZone => Size::new(180.0, 120.0),
            Self::Vpc => Size::new(160.0, 100.0),
            Self::Bucket | Self::Instance => Size::new(120.0, 100.0),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node kind '{0}'")]
pub struct UnknownNodeKind(pub String);

/// What a directed edge means for its target resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdgeAction {
    #[default]
    Read,
    Write,
    Delete,
    Execute,
}

impl EdgeAction {
    pub const ALL: [EdgeAction; 4] =
        [EdgeAction::Read, EdgeAction::Write, EdgeAction::Delete, EdgeAction::Execute];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Delete => "DELETE",
            Self::Execute => "EXECUTE",
        }
    }
}

impl fmt::Display for EdgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeAction {
    type Err = UnknownEdgeAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownEdgeAction(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown edge action '{0}'")]
pub struct UnknownEdgeAction(pub String);
