mod grid;
mod plan;
mod routing;
pub(crate) mod types;
pub use types::*;

use std::collections::HashSet;

use crate::classify::classify;
use crate::config::LayoutConfig;
use crate::ir::{ServiceNode, TierBuckets};
use crate::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Two services with the same id would overdraw each other, so the
    /// whole request is rejected instead of silently merged.
    #[error("duplicate service id `{id}`")]
    DuplicateService { id: String },
}

/// Compute the paint plan for one set of services.
///
/// Classification, placement, routing and assembly run in that order, and
/// the result is deterministic: the same services, theme and config always
/// produce the identical plan.
pub fn compute_plan(
    nodes: &[ServiceNode],
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<DiagramPlan, PlanError> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(PlanError::DuplicateService {
                id: node.id.clone(),
            });
        }
    }

    if nodes.is_empty() {
        return Ok(plan::placeholder_plan(theme, config));
    }

    let mut buckets = TierBuckets::default();
    for node in nodes {
        buckets.push(classify(node), node);
    }

    let grid = grid::layout_tiers(&buckets, config);
    let connectors = routing::route_connectors(nodes, &grid.positions);
    Ok(plan::assemble(
        &buckets,
        &grid.positions,
        connectors,
        grid.height,
        theme,
        config,
    ))
}
