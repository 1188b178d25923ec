use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::{ShapeFamily, Theme};

/// Grid geometry. Units are abstract canvas units; the SVG renderer maps
/// them 1:1 to pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub node_width: f32,
    pub node_height: f32,
    /// Gap between neighbors in a row.
    pub horizontal_spacing: f32,
    /// Gap between wrapped rows of the same tier.
    pub row_spacing: f32,
    /// Extra gap after a tier's last row.
    pub tier_spacing: f32,
    pub canvas_width: f32,
    pub top_margin: f32,
    pub max_nodes_per_row: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            node_height: 100.0,
            horizontal_spacing: 50.0,
            row_spacing: 50.0,
            tier_spacing: 80.0,
            canvas_width: 1920.0,
            top_margin: 100.0,
            max_nodes_per_row: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    detail_font_size: Option<f32>,
    label_color: Option<String>,
    text_color: Option<String>,
    background: Option<String>,
    node_stroke: Option<String>,
    node_stroke_width: Option<f32>,
    connector_color: Option<String>,
    connector_width: Option<f32>,
    shadow_color: Option<String>,
    shadow_offset: Option<f32>,
    frontend_fill: Option<String>,
    middle_fill: Option<String>,
    data_fill: Option<String>,
    frontend_shape: Option<ShapeFamily>,
    middle_shape: Option<ShapeFamily>,
    data_shape: Option<ShapeFamily>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    node_width: Option<f32>,
    node_height: Option<f32>,
    horizontal_spacing: Option<f32>,
    row_spacing: Option<f32>,
    tier_spacing: Option<f32>,
    canvas_width: Option<f32>,
    top_margin: Option<f32>,
    max_nodes_per_row: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
}

/// Parse a config document (JSON5, so comments and trailing commas are
/// allowed) and merge it over the defaults. Unknown keys are ignored.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme `{theme_name}`"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.detail_font_size {
            config.theme.detail_font_size = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.node_stroke {
            config.theme.node_stroke = v;
        }
        if let Some(v) = vars.node_stroke_width {
            config.theme.node_stroke_width = v;
        }
        if let Some(v) = vars.connector_color {
            config.theme.connector_color = v;
        }
        if let Some(v) = vars.connector_width {
            config.theme.connector_width = v;
        }
        if let Some(v) = vars.shadow_color {
            config.theme.shadow_color = v;
        }
        if let Some(v) = vars.shadow_offset {
            config.theme.shadow_offset = v;
        }
        if let Some(v) = vars.frontend_fill {
            config.theme.frontend.fill = v;
        }
        if let Some(v) = vars.middle_fill {
            config.theme.middle.fill = v;
        }
        if let Some(v) = vars.data_fill {
            config.theme.data.fill = v;
        }
        if let Some(v) = vars.frontend_shape {
            config.theme.frontend.shape = v;
        }
        if let Some(v) = vars.middle_shape {
            config.theme.middle.shape = v;
        }
        if let Some(v) = vars.data_shape {
            config.theme.data.shape = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.node_width {
            config.layout.node_width = v;
        }
        if let Some(v) = layout.node_height {
            config.layout.node_height = v;
        }
        if let Some(v) = layout.horizontal_spacing {
            config.layout.horizontal_spacing = v;
        }
        if let Some(v) = layout.row_spacing {
            config.layout.row_spacing = v;
        }
        if let Some(v) = layout.tier_spacing {
            config.layout.tier_spacing = v;
        }
        if let Some(v) = layout.canvas_width {
            config.layout.canvas_width = v;
        }
        if let Some(v) = layout.top_margin {
            config.layout.top_margin = v;
        }
        if let Some(v) = layout.max_nodes_per_row {
            config.layout.max_nodes_per_row = v;
        }
    }

    Ok(config)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}
