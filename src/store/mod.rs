// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Owning collections for nodes and edges.
//!
//! `NodeStore` and `EdgeStore` are the only places node and edge records live; everything
//! else reads them or goes through `ops`.

pub mod cascade;
pub mod edges;
pub mod nodes;

pub use cascade::{cascade_delete, subtree_of};
pub use edges::{Connected, EdgeStore};
pub use nodes::{NodeChange, NodeStore, NodeStoreError};
