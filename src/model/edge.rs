// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};
use super::kind::EdgeAction;

/// A directed, typed connection between two nodes. Only `action` and selection change
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    action: EdgeAction,
    #[serde(default)]
    selected: bool,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self::new_with(source, target, EdgeAction::default())
    }

    pub fn new_with(source: NodeId, target: NodeId, action: EdgeAction) -> Self {
        Self { id: EdgeId::new(source, target), source, target, action, selected: false }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn action(&self) -> EdgeAction {
        self.action
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_action(&mut self, action: EdgeAction) {
        self.action = action;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
