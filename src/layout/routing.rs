use std::collections::BTreeMap;

use crate::ir::ServiceNode;

use super::types::{ConnectorKind, ConnectorPlan, Point, Rect};

/// Route one connector per resolvable link, in manifest order.
///
/// Links whose target never got placed (external names, typos) are dropped
/// silently; a dangling reference must not fail the whole diagram.
pub(super) fn route_connectors(
    nodes: &[ServiceNode],
    positions: &BTreeMap<String, Rect>,
) -> Vec<ConnectorPlan> {
    let mut connectors = Vec::new();
    for node in nodes {
        let Some(from) = positions.get(&node.id) else {
            continue;
        };
        for target in &node.links {
            let Some(to) = positions.get(target) else {
                log::debug!("dropping connector {} -> {target}: no such service", node.id);
                continue;
            };
            connectors.push(route_pair(&node.id, target, from, to));
        }
    }
    connectors
}

/// Pick anchors for a single link.
///
/// A target strictly below the source hangs off the source's bottom edge
/// and lands on the target's top edge; a target strictly above mirrors
/// that. Endpoints that overlap vertically (same row, or wrapped rows of
/// one tier) connect center to center instead.
fn route_pair(from_id: &str, to_id: &str, from: &Rect, to: &Rect) -> ConnectorPlan {
    let (start, end, kind) = if to.top() >= from.bottom() {
        (
            Point { x: from.center_x(), y: from.bottom() },
            Point { x: to.center_x(), y: to.top() },
            ConnectorKind::Waterfall,
        )
    } else if to.bottom() <= from.top() {
        (
            Point { x: from.center_x(), y: from.top() },
            Point { x: to.center_x(), y: to.bottom() },
            ConnectorKind::Waterfall,
        )
    } else {
        (
            Point { x: from.center_x(), y: from.center_y() },
            Point { x: to.center_x(), y: to.center_y() },
            ConnectorKind::Straight,
        )
    };

    ConnectorPlan {
        from: from_id.to_string(),
        to: to_id.to_string(),
        start,
        end,
        kind,
    }
}
