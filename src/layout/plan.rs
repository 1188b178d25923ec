use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::ir::TierBuckets;
use crate::theme::Theme;

use super::types::{ConnectorPlan, DiagramPlan, NodeLabel, PaintOp, Rect};

/// Thinnest stroke a connector op may carry.
const MIN_STROKE_WIDTH: f32 = 0.1;

const PLACEHOLDER_TEXT: &str = "No services to display";
const PLACEHOLDER_WIDTH: f32 = 400.0;
const PLACEHOLDER_HEIGHT: f32 = 50.0;

/// Assemble the final paint plan.
///
/// Op order is the z-order contract: background, then connectors, then
/// every shadow, then every node, so connectors pass under boxes and no
/// shadow lands on a neighbor. Nodes are emitted in tier order.
pub(super) fn assemble(
    buckets: &TierBuckets<'_>,
    positions: &BTreeMap<String, Rect>,
    connectors: Vec<ConnectorPlan>,
    height: f32,
    theme: &Theme,
    config: &LayoutConfig,
) -> DiagramPlan {
    let mut ops = Vec::with_capacity(2 + connectors.len() + buckets.len() * 2);

    ops.push(PaintOp::Background {
        color: theme.background.clone(),
    });

    let stroke_width = theme.connector_width.max(MIN_STROKE_WIDTH);
    for connector in connectors {
        ops.push(PaintOp::Connector {
            connector,
            stroke: theme.connector_color.clone(),
            stroke_width,
        });
    }

    for (tier, nodes) in buckets.iter() {
        let style = theme.tier_style(tier);
        for node in nodes {
            if let Some(bounds) = positions.get(&node.id) {
                ops.push(PaintOp::Shadow {
                    shape: style.shape,
                    bounds: bounds.translated(theme.shadow_offset, theme.shadow_offset),
                    color: theme.shadow_color.clone(),
                });
            }
        }
    }

    for (tier, nodes) in buckets.iter() {
        let style = theme.tier_style(tier);
        for node in nodes {
            let Some(bounds) = positions.get(&node.id) else {
                continue;
            };
            ops.push(PaintOp::Node {
                id: node.id.clone(),
                tier,
                shape: style.shape,
                bounds: *bounds,
                fill: style.fill.clone(),
                stroke: theme.node_stroke.clone(),
                stroke_width: theme.node_stroke_width,
                label: NodeLabel {
                    title: node.id.clone(),
                    detail: (!node.image.is_empty()).then(|| node.image.clone()),
                },
            });
        }
    }

    DiagramPlan {
        width: config.canvas_width,
        height,
        ops,
    }
}

/// Plan for a manifest with no services: one message box, no geometry.
pub(super) fn placeholder_plan(theme: &Theme, config: &LayoutConfig) -> DiagramPlan {
    let bounds = Rect::new(
        config.top_margin,
        config.top_margin,
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
    );
    DiagramPlan {
        width: config.canvas_width,
        height: config.top_margin * 2.0 + PLACEHOLDER_HEIGHT,
        ops: vec![
            PaintOp::Background {
                color: theme.background.clone(),
            },
            PaintOp::Placeholder {
                text: PLACEHOLDER_TEXT.to_string(),
                bounds,
            },
        ],
    }
}
