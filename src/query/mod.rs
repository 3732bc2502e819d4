// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over nodes and edges.
//!
//! Queries derive hierarchy order, absolute geometry and connection validity; none of
//! them mutate state.

pub mod connection;
pub mod hierarchy;

pub use connection::{validate_connection, would_create_cycle, ConnectionError};
pub use hierarchy::{depths, order_by_hierarchy, sort_by_hierarchy, HierarchyError};
pub use hit_test::{absolute_bounds, innermost_container};
