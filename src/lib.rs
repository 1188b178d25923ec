pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compose;
pub mod config;
pub mod ir;
pub mod layout;
pub mod render;
pub mod theme;

pub use compose::{parse_compose, ComposeError};
pub use config::{load_config, parse_config, Config, LayoutConfig};
pub use ir::{ServiceNode, Tier, TierHint};
pub use layout::{
    compute_plan, ConnectorKind, ConnectorPlan, DiagramPlan, NodeLabel, PaintOp, PlanError, Point,
    Rect,
};
pub use render::render_svg;
pub use theme::{ShapeFamily, Theme};

#[cfg(feature = "cli")]
pub use cli::run;
