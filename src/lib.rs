// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Stratus: containment and connection engine for cloud-architecture diagrams.
//!
//! Regions hold availability zones, zones hold VPCs, VPCs hold buckets and instances.
//! The rendering surface reports drops, moves, connects and deletes as [`ops::Op`]s;
//! [`model::Diagram`] applies them and hands back a [`model::DiagramSnapshot`].

pub mod config;
pub mod model;
pub mod naming;
pub mod nesting;
pub mod ops;
pub mod query;
pub mod store;

pub use config::{EngineConfig, LeafValues};
pub use model::{Diagram, DiagramSnapshot};
pub use ops::{apply_ops, ApplyError, ApplyResult, Op, Rejection};
