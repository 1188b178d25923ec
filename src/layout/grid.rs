use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::ir::TierBuckets;

use super::types::Rect;

/// Placed bounds per service id plus the vertical extent the grid consumed.
#[derive(Debug)]
pub(super) struct GridLayout {
    pub positions: BTreeMap<String, Rect>,
    /// Final cursor position: where the next tier would have started.
    /// Callers size the canvas to this.
    pub height: f32,
}

/// Place every node on the tier grid.
///
/// Tiers stack top to bottom in ordinal order; each tier wraps into rows of
/// at most `max_nodes_per_row`, and each row is centered on the canvas
/// independently. Empty tiers consume no vertical space, so a manifest with
/// only data stores still starts at the top margin.
pub(super) fn layout_tiers(buckets: &TierBuckets<'_>, config: &LayoutConfig) -> GridLayout {
    let per_row = config.max_nodes_per_row.max(1);
    let mut positions = BTreeMap::new();
    let mut cursor = config.top_margin;

    for (_, nodes) in buckets.iter() {
        if nodes.is_empty() {
            continue;
        }
        for row in nodes.chunks(per_row) {
            let row_width = row.len() as f32 * config.node_width
                + (row.len() - 1) as f32 * config.horizontal_spacing;
            let mut x = (config.canvas_width - row_width) / 2.0;
            for node in row {
                positions.insert(
                    node.id.clone(),
                    Rect::new(x, cursor, config.node_width, config.node_height),
                );
                x += config.node_width + config.horizontal_spacing;
            }
            cursor += config.node_height + config.row_spacing;
        }
        cursor += config.tier_spacing;
    }

    GridLayout {
        positions,
        height: cursor,
    }
}
