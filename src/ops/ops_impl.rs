// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Node/edge mutation helpers used by `apply_ops`.
/// Missing endpoints and unknown ids are no-ops: they log and leave the delta untouched.
fn apply_op(
    config: &EngineConfig,
    nodes: &mut NodeStore,
    edges: &mut EdgeStore,
    op: &Op,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match *op {
        Op::CreateNode { kind, position } => {
            let node_id = match nodes.create_node(kind, position, config.leaf_values) {
                Ok(node_id) => node_id,
                Err(NodeStoreError::NestingNotAllowed { child, parent }) => {
                    return Err(Rejection::NestingNotAllowed { child, parent }.into());
                }
                Err(NodeStoreError::Hierarchy(err)) => return Err(err.into()),
                Err(NodeStoreError::UnknownParent(parent)) => {
                    tracing::debug!(%parent, "ignoring create under a vanished parent");
                    return Ok(());
                }
            };
            if let Some(node) = nodes.get(node_id) {
                tracing::debug!(
                    %node_id,
                    kind = %kind,
                    value = node.value(),
                    parent = ?node.parent_id(),
                    "node created"
                );
            }
            delta.record_added(ObjectRef::Node(node_id));
            Ok(())
        }
        Op::UpdateNode { node_id, change } => {
            let updated = nodes.update_node(node_id, change, config.parent_extent)?;
            if updated {
                delta.record_updated(ObjectRef::Node(node_id));
            } else {
                tracing::debug!(%node_id, "ignoring change for unknown node");
            }
            Ok(())
        }
        Op::DeleteNode { node_id } => {
            if !nodes.contains(node_id) {
                tracing::debug!(%node_id, "ignoring delete of unknown node");
                return Ok(());
            }
            let doomed = subtree_of(node_id, nodes.nodes());
            let removed_edges = edges.remove_touching(&doomed);
            let removed_nodes = nodes.remove_all(&doomed);
            tracing::debug!(
                %node_id,
                nodes = removed_nodes.len(),
                edges = removed_edges.len(),
                "node deleted with subtree"
            );
            for edge_id in removed_edges {
                delta.record_removed(ObjectRef::Edge(edge_id));
            }
            for removed in removed_nodes {
                delta.record_removed(ObjectRef::Node(removed));
            }
            Ok(())
        }
        Op::Connect { source, target } => {
            if !nodes.contains(source) || !nodes.contains(target) {
                tracing::debug!(%source, %target, "ignoring connect with a missing endpoint");
                return Ok(());
            }
            match edges.connect(source, target, config.prevent_cycles) {
                Ok(Connected::Created(edge_id)) => {
                    tracing::debug!(%edge_id, "edge connected");
                    delta.record_added(ObjectRef::Edge(edge_id));
                    Ok(())
                }
                Ok(Connected::Existing(edge_id)) => {
                    tracing::debug!(%edge_id, "pair already connected");
                    Ok(())
                }
                Err(err) => Err(Rejection::from(err).into()),
            }
        }
        Op::SetEdgeAction { edge_id, action } => {
            if edges.set_action(edge_id, action) {
                tracing::debug!(%edge_id, %action, "edge action changed");
                delta.record_updated(ObjectRef::Edge(edge_id));
            } else {
                tracing::debug!(%edge_id, "ignoring action change for unknown edge");
            }
            Ok(())
        }
        Op::SelectEdge { edge_id, selected } => {
            if edges.set_selected(edge_id, selected) {
                delta.record_updated(ObjectRef::Edge(edge_id));
            }
            Ok(())
        }
        Op::DeleteEdge { edge_id } => {
            if edges.remove(edge_id).is_some() {
                tracing::debug!(%edge_id, "edge deleted");
                delta.record_removed(ObjectRef::Edge(edge_id));
            } else {
                tracing::debug!(%edge_id, "ignoring delete of unknown edge");
            }
            Ok(())
        }
    }
}
