use serde::Serialize;

use crate::ir::Tier;
use crate::theme::ShapeFamily;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// Bottom-center of the source down to top-center of the target (or the
    /// mirror of that for upward links).
    Waterfall,
    /// Center to center, for endpoints that share a vertical band.
    Straight,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectorPlan {
    pub from: String,
    pub to: String,
    pub start: Point,
    pub end: Point,
    pub kind: ConnectorKind,
}

impl ConnectorPlan {
    /// Shortest length a connector reports, so renderer primitives never
    /// collapse to nothing on degenerate geometry.
    pub const MIN_LENGTH: f32 = 1.0;

    pub fn length(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dx.hypot(dy).max(Self::MIN_LENGTH)
    }

    pub fn angle_degrees(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dy.atan2(dx).to_degrees()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeLabel {
    pub title: String,
    pub detail: Option<String>,
}

/// One paint operation. A plan's ops are already in back-to-front order;
/// renderers draw them in sequence and never reorder.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintOp {
    Background {
        color: String,
    },
    Connector {
        connector: ConnectorPlan,
        stroke: String,
        stroke_width: f32,
    },
    Shadow {
        shape: ShapeFamily,
        bounds: Rect,
        color: String,
    },
    Node {
        id: String,
        tier: Tier,
        shape: ShapeFamily,
        bounds: Rect,
        fill: String,
        stroke: String,
        stroke_width: f32,
        label: NodeLabel,
    },
    Placeholder {
        text: String,
        bounds: Rect,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagramPlan {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<PaintOp>,
}

impl DiagramPlan {
    pub fn node_bounds(&self, id: &str) -> Option<Rect> {
        self.ops.iter().find_map(|op| match op {
            PaintOp::Node { id: node, bounds, .. } if node == id => Some(*bounds),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
