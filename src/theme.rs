use serde::{Deserialize, Serialize};

use crate::ir::Tier;

/// Silhouette a renderer draws for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    /// Rounded rectangle, the default service look.
    Rounded,
    /// Disk cylinder for data stores.
    Storage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierStyle {
    pub shape: ShapeFamily,
    pub fill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub detail_font_size: f32,
    /// Label color on node fills.
    pub label_color: String,
    /// Text color on the bare canvas (placeholder message).
    pub text_color: String,
    pub background: String,
    pub node_stroke: String,
    pub node_stroke_width: f32,
    pub connector_color: String,
    pub connector_width: f32,
    pub shadow_color: String,
    pub shadow_offset: f32,
    pub frontend: TierStyle,
    pub middle: TierStyle,
    pub data: TierStyle,
}

impl Theme {
    pub const NAMES: [&'static str; 2] = ["classic", "slate"];

    pub fn classic() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: 14.0,
            detail_font_size: 10.0,
            label_color: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
            node_stroke: "#000000".to_string(),
            node_stroke_width: 2.0,
            connector_color: "#808080".to_string(),
            connector_width: 1.5,
            shadow_color: "#C8C8C8".to_string(),
            shadow_offset: 6.0,
            frontend: TierStyle {
                shape: ShapeFamily::Rounded,
                fill: "#2E8B57".to_string(),
            },
            middle: TierStyle {
                shape: ShapeFamily::Rounded,
                fill: "#0064C8".to_string(),
            },
            data: TierStyle {
                shape: ShapeFamily::Storage,
                fill: "#FFA500".to_string(),
            },
        }
    }

    pub fn slate() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            detail_font_size: 10.0,
            label_color: "#F4F7FB".to_string(),
            text_color: "#1C2430".to_string(),
            background: "#F5F7FA".to_string(),
            node_stroke: "#2B3442".to_string(),
            node_stroke_width: 1.5,
            connector_color: "#7A8AA6".to_string(),
            connector_width: 1.5,
            shadow_color: "#D5DBE4".to_string(),
            shadow_offset: 5.0,
            frontend: TierStyle {
                shape: ShapeFamily::Rounded,
                fill: "#3E7C59".to_string(),
            },
            middle: TierStyle {
                shape: ShapeFamily::Rounded,
                fill: "#2F5E9E".to_string(),
            },
            data: TierStyle {
                shape: ShapeFamily::Storage,
                fill: "#C07A2B".to_string(),
            },
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "slate" => Some(Self::slate()),
            _ => None,
        }
    }

    pub fn tier_style(&self, tier: Tier) -> &TierStyle {
        match tier {
            Tier::Frontend => &self.frontend,
            Tier::Middle => &self.middle,
            Tier::Data => &self.data,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
