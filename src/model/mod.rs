// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A diagram owns nodes (typed, nested resources) and edges (typed, directed connections).

pub mod diagram;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod edge;
pub mod geometry;
pub mod ids;
pub mod kind;
pub mod node;
pub mod object_ref;

pub use diagram::{Diagram, DiagramSnapshot};
pub use edge::Edge;
pub use geometry::{Point, Rect, Size, Viewport};
pub use ids::{EdgeId, IdError, NodeId, NodeIdAllocator};
pub use kind::{EdgeAction, NodeKind, UnknownEdgeAction, UnknownNodeKind};
pub use node::Node;
pub use object_ref::{ObjectRef, ParseObjectRefError};
