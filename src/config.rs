// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine configuration.
//!
//! Hosts either build an [`EngineConfig`] in code or load one from JSON; missing fields
//! take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How S3 bucket and EC2 instance values are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafValues {
    /// Every bucket is `my-bucket`, every instance `i-1234567890abcdef0`.
    Placeholder,
    /// Values increment across the whole diagram.
    #[default]
    Unique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub prevent_cycles: bool,
    pub leaf_values: LeafValues,
    pub parent_extent: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { prevent_cycles: true, leaf_values: LeafValues::default(), parent_extent: true }
    }
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }

    pub fn with_cycle_prevention(mut self, prevent_cycles: bool) -> Self {
        self.prevent_cycles = prevent_cycles;
        self
    }

    pub fn with_leaf_values(mut self, leaf_values: LeafValues) -> Self {
        self.leaf_values = leaf_values;
        self
    }

    pub fn with_parent_extent(mut self, parent_extent: bool) -> Self {
        self.parent_extent = parent_extent;
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[source] serde_json::Error),
}
